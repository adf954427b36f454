// ==========================================
// 供应商质量比率系统 - 报表导出层
// ==========================================
// 职责: 把报表包落盘成 CSV (每张表一个文件,
//       文件名沿用既有 Excel 工作簿的 sheet 命名)
// 口径: 年/月/供应商表的展示值保留 1 位小数, 缺失为空白;
//       柱状图数据沿用既有图表标签的 2 位小数
// ==========================================

use crate::api::SqrReport;
use crate::domain::{round_1dp, MONTH_CODES};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出目录创建失败: {0}")]
    DirCreateError(String),

    #[error("CSV 写出失败: {0}")]
    CsvWriteError(#[from] csv::Error),

    #[error("文件写出失败: {0}")]
    FileWriteError(#[from] std::io::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

/// 把完整报表包写到导出目录
///
/// 产出文件:
/// - `Yearly SQR Percentages.csv`
/// - `Monthly SQR Percentages.csv`
/// - `Vendor SQR Percentages.csv`
/// - 每个图表年份一个 `Bar Chart {year}.csv`
pub fn write_report(report: &SqrReport, dir: &Path) -> ExportResult<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ExportError::DirCreateError(format!("{}: {}", dir.display(), e)))?;

    write_year_table(report, &dir.join("Yearly SQR Percentages.csv"))?;
    write_month_table(report, &dir.join("Monthly SQR Percentages.csv"))?;
    write_vendor_table(report, &dir.join("Vendor SQR Percentages.csv"))?;

    for year in &report.chart_years {
        write_top_chart(report, year, &dir.join(format!("Bar Chart {}.csv", year)))?;
    }

    tracing::info!(dir = %dir.display(), charts = report.chart_years.len(), "SQR 报表导出完成");
    Ok(())
}

/// 年度表: 一行 "SQR Percentage", 每个年份一列
fn write_year_table(report: &SqrReport, path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![String::new()];
    header.extend(report.year_table.entries.iter().map(|(y, _)| y.clone()));
    writer.write_record(&header)?;

    let mut row = vec!["SQR Percentage".to_string()];
    row.extend(
        report
            .year_table
            .entries
            .iter()
            .map(|(_, cell)| format_cell_1dp(cell.raw())),
    );
    writer.write_record(&row)?;

    writer.flush()?;
    Ok(())
}

/// 月度表: 行 = 12 个月份码, 列 = 年份; 省略的月份为空白
fn write_month_table(report: &SqrReport, path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let years: Vec<&String> = report.month_table.years.keys().collect();

    let mut header = vec!["Month".to_string()];
    header.extend(years.iter().map(|y| (*y).clone()));
    writer.write_record(&header)?;

    for month in MONTH_CODES {
        let mut row = vec![month.to_string()];
        for year in &years {
            row.push(format_cell_1dp(report.month_table.get(year.as_str(), month)));
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// 供应商表: 行 = DMR 供应商, 列 = 出现过的年份 (升序)
fn write_vendor_table(report: &SqrReport, path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let years: BTreeSet<&String> = report
        .vendor_table
        .vendors
        .values()
        .flat_map(|row| row.keys())
        .collect();

    let mut header = vec!["Vendor".to_string()];
    header.extend(years.iter().map(|y| (*y).clone()));
    writer.write_record(&header)?;

    for (vendor, cells) in &report.vendor_table.vendors {
        let mut row = vec![vendor.clone()];
        for year in &years {
            let value = cells.get(*year).and_then(|c| c.raw());
            row.push(format_cell_1dp(value));
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// 柱状图数据: 某年份头部供应商排名
fn write_top_chart(report: &SqrReport, year: &str, path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Vendor", "SQR Ratio"])?;

    if let Some(entries) = report.top_by_year.get(year) {
        for entry in entries {
            // 图表标签口径: 2 位小数
            let ratio = format!("{:.2}", entry.ratio);
            writer.write_record([entry.vendor.as_str(), ratio.as_str()])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// 展示值: 1 位小数, 缺失为空白
fn format_cell_1dp(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", round_1dp(v)),
        None => String::new(),
    }
}
