// ==========================================
// 供应商质量比率系统 - 台账文件解析器
// ==========================================
// 支持: Excel (.xlsx/.xls, DMR 台账) / CSV (.csv, PO 台账)
// 输出: 表头 -> 值 的原始行映射, 列映射由 RecordReader 负责
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 原始行: 表头 -> 单元格文本
pub type RawRow = HashMap<String, String>;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvLogParser;

impl CsvLogParser {
    pub fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelLogParser;

impl ExcelLogParser {
    pub fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let Some(sheet_name) = sheet_names.first().cloned() else {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        };

        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut range_rows = range.rows();
        let header_row = range_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell_to_text(cell));
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(rows)
    }
}

/// 单元格转文本
///
/// 日期单元格转成 ISO 风格字符串 (`YYYY-MM-DD`), 其余按 Display;
/// 空单元格与错误单元格转成空串
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
