// ==========================================
// 供应商质量比率系统 - 领域类型定义
// ==========================================
// 职责: 时间键与比率单元格的基础类型
// 红线: 比率单元格用和类型区分 "缺失" 与 "0",
//       不允许用裸 f64/NaN 表达缺失
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 时间键 (Period Key)
// ==========================================

/// 年份键: 日期串前 4 个字符 (例如 "2023")
///
/// 上游导入层负责把日期统一成 ISO 风格字符串 (`YYYY-MM-DD...`);
/// 畸形日期不在此处校验, 其年份键只是匹配不到任何记录
pub type Year = String;

/// 月份键: 补零两位月份码 ("01".."12")
pub type MonthCode = &'static str;

/// 12 个规范月份码, 月度计数表对每个年份全量铺开
pub const MONTH_CODES: [MonthCode; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

/// 年份键是否为纯数字 (用于展示边界过滤 "NaT-"、空串等畸形键)
pub fn is_digit_year(year: &str) -> bool {
    !year.is_empty() && year.chars().all(|c| c.is_ascii_digit())
}

// ==========================================
// 比率单元格 (Ratio Cell)
// ==========================================
// 语义:
// - Value(v): 分子/分母都存在且分母非 0, v = (分子/分母)×100
// - Missing:  分母数据集中没有该键 (或年级口径下分母为 0)
// 月度口径下 "分母为 0" 的单元格整体省略, 不会出现 Missing 占位
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum RatioCell {
    Value(f64),
    Missing,
}

impl RatioCell {
    /// 原始比率值 (未舍入, 用于排名/排序)
    pub fn raw(&self) -> Option<f64> {
        match self {
            RatioCell::Value(v) => Some(*v),
            RatioCell::Missing => None,
        }
    }

    /// 展示值: 保留 1 位小数
    ///
    /// 舍入只发生在展示边界; 比较与排名一律使用 `raw`
    pub fn rounded_1dp(&self) -> Option<f64> {
        self.raw().map(round_1dp)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RatioCell::Missing)
    }
}

impl From<Option<f64>> for RatioCell {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => RatioCell::Value(v),
            None => RatioCell::Missing,
        }
    }
}

impl From<RatioCell> for Option<f64> {
    fn from(cell: RatioCell) -> Self {
        cell.raw()
    }
}

impl fmt::Display for RatioCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded_1dp() {
            Some(v) => write!(f, "{:.1}", v),
            None => write!(f, ""),
        }
    }
}

/// 保留 1 位小数
pub fn round_1dp(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
