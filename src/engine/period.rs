// ==========================================
// 供应商质量比率系统 - 时段计数引擎
// ==========================================
// 职责: 对任意记录流做年度 / 月度计数
// 输入: 源记录流 + (年度口径) 请求键集
// 输出: YearCountTable / MonthCountTable
// ==========================================
// 口径说明:
// - 年度计数按调用方请求的键集铺开;
// - 月度计数按"数据中出现过的年份"铺开, 每年 12 个月全量,
//   两种口径的迭代来源不同, 属既有报表行为, 不得合并
// ==========================================

use crate::domain::{MonthCountTable, SourceRecord, YearCountTable, MONTH_CODES};
use crate::engine::temporal::{month_key, year_key};
use std::collections::BTreeMap;

// ==========================================
// PeriodCounter - 时段计数引擎
// ==========================================
pub struct PeriodCounter {
    // 无状态引擎, 不需要注入依赖
}

impl PeriodCounter {
    pub fn new() -> Self {
        Self {}
    }

    /// 年度计数
    ///
    /// 对 `keys` 中的每个键, 统计年份键等于该键的记录数;
    /// 结果每个请求键必有一项, 顺序与 `keys` 一致
    ///
    /// # 边界
    /// 空记录流对每个键计 0, 不会失败
    pub fn count_by_year(&self, records: &[SourceRecord], keys: &[String]) -> YearCountTable {
        let entries = keys
            .iter()
            .map(|key| {
                let count = records
                    .iter()
                    .filter(|r| year_key(&r.date) == key.as_str())
                    .count() as u64;
                (key.clone(), count)
            })
            .collect();

        YearCountTable { entries }
    }

    /// 月度计数
    ///
    /// 对数据中出现过的每个年份 (不是调用方的键集),
    /// 按 12 个规范月份码统计 "年份匹配且月份子串匹配" 的记录数;
    /// 每个年份都带全部 12 个月的条目
    pub fn count_by_month(&self, records: &[SourceRecord]) -> MonthCountTable {
        let mut years: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

        // 数据中出现过的年份键 (含畸形键, 宽松策略)
        for record in records {
            let year = year_key(&record.date).to_string();
            years.entry(year).or_insert_with(|| {
                MONTH_CODES
                    .iter()
                    .map(|m| (m.to_string(), 0u64))
                    .collect()
            });
        }

        for record in records {
            let year = year_key(&record.date);
            let month = month_key(&record.date);
            if let Some(months) = years.get_mut(year) {
                if let Some(count) = months.get_mut(month) {
                    *count += 1;
                }
                // 月份子串不在规范月份码中 (畸形日期): 静默不计
            }
        }

        MonthCountTable { years }
    }
}

impl Default for PeriodCounter {
    fn default() -> Self {
        Self::new()
    }
}
