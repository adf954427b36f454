// ==========================================
// 供应商质量比率系统 - 报表 API
// ==========================================
// 职责: 串联时段计数 / 供应商聚合 / 比率计算三个引擎,
//       产出完整报表包 (三张比率表 + 每年头部排名)
// 架构: API 层 → 引擎层; 本层不做文件 I/O
// ==========================================

use crate::domain::{
    is_digit_year, MonthRatioTable, SourceRecord, TopRatioEntry, VendorRatioTable, Year,
    YearRatioTable,
};
use crate::engine::temporal::unique_years;
use crate::engine::{PeriodCounter, RatioEngine, VendorAggregator};
use crate::perf::PerfGuard;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// SqrReport - 报表包
// ==========================================
// 交给导出/看板协作方的完整结果; 表中保留原始比率值,
// 舍入 (1 位小数) 由协作方在展示边界完成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqrReport {
    /// 年度 SQR 比率表 (键序 = DMR 年份首现序, 只含纯数字年份)
    pub year_table: YearRatioTable,
    /// 月度 SQR 比率表
    pub month_table: MonthRatioTable,
    /// 供应商×年份 SQR 比率表
    pub vendor_table: VendorRatioTable,
    /// 两个台账共有的年份 (升序), 每年出一张头部排名图
    pub chart_years: Vec<Year>,
    /// 每个图表年份的头部供应商排名 (原始比率值降序)
    pub top_by_year: BTreeMap<Year, Vec<TopRatioEntry>>,
}

// ==========================================
// ReportApi - 报表 API
// ==========================================
pub struct ReportApi {
    counter: PeriodCounter,
    ratio: RatioEngine,
    vendor: VendorAggregator,
    /// 头部排名条数 (既有报表为 8)
    top_n: usize,
}

impl ReportApi {
    pub fn new(top_n: usize) -> Self {
        Self {
            counter: PeriodCounter::new(),
            ratio: RatioEngine::new(),
            vendor: VendorAggregator::new(),
            top_n,
        }
    }

    /// 对两条记录流全量计算报表包
    ///
    /// 纯函数: 相同输入必产出相同 (逐字节一致的) 报表,
    /// 展示层可按输入内容安全缓存
    pub fn generate(&self, dmr_records: &[SourceRecord], po_records: &[SourceRecord]) -> SqrReport {
        let _perf = PerfGuard::new("generate_sqr_report");

        // 年度口径
        let dmr_years = unique_years(dmr_records.iter().map(|r| r.date.as_str()));
        let po_years = unique_years(po_records.iter().map(|r| r.date.as_str()));

        let dmr_year_counts = self.counter.count_by_year(dmr_records, &dmr_years);
        let po_year_counts = self.counter.count_by_year(po_records, &po_years);

        let mut year_table = self.ratio.year_ratio(&dmr_year_counts, &po_year_counts);
        // 展示边界过滤: 只保留纯数字年份列 (畸形日期产生的键在此剔除)
        year_table.entries.retain(|(year, _)| is_digit_year(year));

        // 月度口径
        let dmr_month_counts = self.counter.count_by_month(dmr_records);
        let po_month_counts = self.counter.count_by_month(po_records);
        let month_table = self.ratio.month_ratio(&dmr_month_counts, &po_month_counts);

        // 供应商口径
        let dmr_vendor_counts = self.vendor.count_by_vendor_year(dmr_records);
        let po_vendor_counts = self.vendor.count_by_vendor_year(po_records);
        let vendor_table = self.ratio.vendor_ratio(&dmr_vendor_counts, &po_vendor_counts);

        // 图表年份: 两个台账共有年份, 升序
        let mut chart_years: Vec<Year> = dmr_years
            .iter()
            .filter(|y| po_years.contains(y) && is_digit_year(y))
            .cloned()
            .collect();
        chart_years.sort();

        let top_by_year = chart_years
            .iter()
            .map(|year| {
                (
                    year.clone(),
                    self.vendor.top_ratios(&vendor_table, year, self.top_n),
                )
            })
            .collect();

        tracing::info!(
            dmr_records = dmr_records.len(),
            po_records = po_records.len(),
            years = year_table.entries.len(),
            vendors = vendor_table.vendors.len(),
            chart_years = chart_years.len(),
            "SQR 报表计算完成"
        );

        SqrReport {
            year_table,
            month_table,
            vendor_table,
            chart_years,
            top_by_year,
        }
    }
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::new(8)
    }
}
