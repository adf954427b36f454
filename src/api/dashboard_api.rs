// ==========================================
// 供应商质量比率系统 - 看板 API
// ==========================================
// 职责: 为交互看板提供供应商/年份选项与按需 PBC 序列
// 架构: API 层 → PBC 统计引擎
// 口径: 只有本层做供应商大写归一化 (重点供应商过滤);
//       报表 API 的供应商连接保持区分大小写
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{PbcSeries, SourceRecord};
use crate::engine::PbcEngine;
use chrono::{Datelike, NaiveDate};

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    pbc: PbcEngine,
    /// 重点供应商清单 (大写); 为空时不过滤
    key_suppliers: Vec<String>,
}

impl DashboardApi {
    /// # 参数
    /// - `key_suppliers`: 重点供应商清单, 内部统一大写
    pub fn new(key_suppliers: Vec<String>) -> Self {
        let key_suppliers = key_suppliers
            .into_iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            pbc: PbcEngine::new(),
            key_suppliers,
        }
    }

    /// 供应商选项: DMR 流中出现过的供应商 (大写, 首现序),
    /// 配置了重点供应商清单时只保留清单内的
    pub fn vendor_options(&self, dmr_records: &[SourceRecord]) -> Vec<String> {
        let mut options: Vec<String> = Vec::new();
        for record in dmr_records {
            let vendor = record.vendor.trim().to_uppercase();
            if vendor.is_empty() || options.contains(&vendor) {
                continue;
            }
            if !self.key_suppliers.is_empty() && !self.key_suppliers.contains(&vendor) {
                continue;
            }
            options.push(vendor);
        }
        options
    }

    /// 年份选项: DMR 流中可解析日期的年份, 去重升序
    pub fn year_options(&self, dmr_records: &[SourceRecord]) -> Vec<i32> {
        let mut years: Vec<i32> = dmr_records
            .iter()
            .filter_map(|r| {
                let head = r.date.get(0..10)?;
                NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
            })
            .map(|d| d.year())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// 按需计算 PBC 序列
    ///
    /// 所选组合没有任何数据点时返回 EmptySelection
    /// (展示层渲染为可恢复警告, 不终止会话)
    pub fn pbc(
        &self,
        dmr_records: &[SourceRecord],
        vendor: &str,
        year: i32,
    ) -> ApiResult<PbcSeries> {
        let series = self.pbc.compute(dmr_records, vendor, year);

        if series.is_empty() {
            return Err(ApiError::EmptySelection {
                vendor: vendor.to_string(),
                year,
            });
        }

        Ok(series)
    }
}
