// ==========================================
// 供应商质量比率系统 - 供应商聚合引擎
// ==========================================
// 职责: 按 (年份, 供应商) 聚合两条记录流, 产出供应商计数表;
//       并对供应商比率表做年度头部排名 (柱状图数据)
// ==========================================
// 口径说明:
// - 供应商标识逐字保留 (区分大小写), 本层不做大写归一化
// - 年份只保留纯数字键 (畸形日期行在此处被过滤)
// - 排名使用原始比率值, 不得先舍入再排名
// ==========================================

use crate::domain::{is_digit_year, SourceRecord, TopRatioEntry, VendorCountTable, VendorRatioTable};
use crate::engine::temporal::year_key;
use std::collections::BTreeMap;

// ==========================================
// VendorAggregator - 供应商聚合引擎
// ==========================================
pub struct VendorAggregator {
    // 无状态引擎, 不需要注入依赖
}

impl VendorAggregator {
    pub fn new() -> Self {
        Self {}
    }

    /// 按 (供应商, 年份) 计数
    ///
    /// 供应商标识逐字保留; 年份键非纯数字的记录被过滤掉
    /// (与时段计数引擎的宽松策略不同, 此处沿用既有报表的 isdigit 过滤)
    pub fn count_by_vendor_year(&self, records: &[SourceRecord]) -> VendorCountTable {
        let mut vendors: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

        for record in records {
            let year = year_key(&record.date);
            if !is_digit_year(year) {
                continue;
            }

            *vendors
                .entry(record.vendor.clone())
                .or_default()
                .entry(year.to_string())
                .or_insert(0) += 1;
        }

        VendorCountTable { vendors }
    }

    /// 年度头部排名: 某年份比率最高的前 n 个供应商
    ///
    /// - Missing / 省略的单元格不参与排名
    /// - 按原始比率值降序; 同值按供应商名升序, 保证结果稳定
    pub fn top_ratios(&self, table: &VendorRatioTable, year: &str, n: usize) -> Vec<TopRatioEntry> {
        let mut entries: Vec<TopRatioEntry> = table
            .vendors
            .iter()
            .filter_map(|(vendor, years)| {
                years.get(year).and_then(|cell| cell.raw()).map(|ratio| TopRatioEntry {
                    vendor: vendor.clone(),
                    ratio,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.ratio
                .total_cmp(&a.ratio)
                .then_with(|| a.vendor.cmp(&b.vendor))
        });
        entries.truncate(n);
        entries
    }
}

impl Default for VendorAggregator {
    fn default() -> Self {
        Self::new()
    }
}
