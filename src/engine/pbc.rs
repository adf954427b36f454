// ==========================================
// 供应商质量比率系统 - PBC 统计引擎
// ==========================================
// 职责: 对单个供应商单个年份的 DMR 月度序列
//       计算均值 / 移动极差 / 过程限 (UPL, LPL, URL)
// 输入: 原始 DMR 记录流 + 供应商 + 年份
// 输出: PbcSeries (逐点数据 + 广播统计线)
// ==========================================
// 口径冻结 (与标准 XmR 控制图公式不一致, 未经签核不得修正):
// 1) avg_moving_range 取序列"最后一个"移动极差, 不是全序列均值
// 2) LPL 自然值为负时钳到 0, 非负时回落为 mean
// ==========================================

use crate::domain::{PbcPoint, PbcSeries, SourceRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// XmR 个体值图系数 (对应标准公式中的 2.66)
const PROCESS_LIMIT_FACTOR: f64 = 2.66;

/// XmR 极差图系数 (对应标准公式中的 3.27)
const RANGE_LIMIT_FACTOR: f64 = 3.27;

// ==========================================
// PbcEngine - PBC 统计引擎
// ==========================================
pub struct PbcEngine {
    // 无状态引擎, 相同输入必产出相同序列 (可安全缓存)
}

impl PbcEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算某供应商某年份的 PBC 序列
    ///
    /// 过滤口径: 供应商在比较前做大写归一化 (两侧都归一化),
    /// 日期用 chrono 解析, 解析失败的记录静默丢弃;
    /// 当年没有 DMR 的月份不补零, 序列只含有数据的月份
    ///
    /// # 边界
    /// - 0 个数据点: 返回空序列, 所有统计线为 0.0, 不失败
    /// - 1 个数据点: 移动极差为 [0], 统计线照常计算
    pub fn compute(&self, dmr_records: &[SourceRecord], vendor: &str, year: i32) -> PbcSeries {
        let monthly = self.monthly_counts(dmr_records, vendor, year);

        let counts: Vec<u64> = monthly.values().copied().collect();
        let months: Vec<String> = monthly.keys().cloned().collect();

        let moving_ranges = moving_ranges(&counts);
        let mean = if counts.is_empty() {
            0.0
        } else {
            counts.iter().sum::<u64>() as f64 / counts.len() as f64
        };

        // 口径冻结: 取最后一个移动极差, 不是均值
        let avg_moving_range = moving_ranges.last().copied().unwrap_or(0) as f64;

        let upl = mean + PROCESS_LIMIT_FACTOR * avg_moving_range;
        // 口径冻结: 自然下限非负时, LPL 回落为 mean
        let natural_lpl = mean - PROCESS_LIMIT_FACTOR * avg_moving_range;
        let lpl = if natural_lpl < 0.0 { 0.0 } else { mean };
        let url = avg_moving_range * RANGE_LIMIT_FACTOR;

        let points = months
            .into_iter()
            .zip(counts.iter().zip(moving_ranges.iter()))
            .map(|(year_month, (count, moving_range))| PbcPoint {
                year_month,
                count: *count,
                moving_range: *moving_range,
            })
            .collect();

        PbcSeries {
            vendor: vendor.to_string(),
            year,
            points,
            mean,
            avg_moving_range,
            upl,
            lpl,
            url,
        }
    }

    /// 过滤并按月计数: 供应商大写归一化匹配 + 年份匹配
    ///
    /// BTreeMap 键为 "YYYY-MM", 天然按时间升序
    fn monthly_counts(
        &self,
        dmr_records: &[SourceRecord],
        vendor: &str,
        year: i32,
    ) -> BTreeMap<String, u64> {
        let vendor_upper = vendor.to_uppercase();
        let mut monthly: BTreeMap<String, u64> = BTreeMap::new();

        for record in dmr_records {
            if record.vendor.to_uppercase() != vendor_upper {
                continue;
            }
            let Some(date) = parse_date(&record.date) else {
                continue;
            };
            if date.year() != year {
                continue;
            }

            let year_month = format!("{:04}-{:02}", date.year(), date.month());
            *monthly.entry(year_month).or_insert(0) += 1;
        }

        monthly
    }
}

impl Default for PbcEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 移动极差序列: 首点为 0, 其余为相邻点绝对差
fn moving_ranges(counts: &[u64]) -> Vec<u64> {
    if counts.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::with_capacity(counts.len());
    ranges.push(0);
    for window in counts.windows(2) {
        ranges.push(window[0].abs_diff(window[1]));
    }
    ranges
}

/// 宽松日期解析: 取前 10 个字符按 `YYYY-MM-DD` 解析, 失败返回 None
fn parse_date(date: &str) -> Option<NaiveDate> {
    let head = date.get(0..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
