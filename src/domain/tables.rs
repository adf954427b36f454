// ==========================================
// 供应商质量比率系统 - 派生表定义
// ==========================================
// 职责: 计数表 / 比率表 / PBC 序列等派生实体
// 红线: 全部为不可变派生数据, 每次运行整体重算;
//       输出容器使用有序结构, 保证逐字节幂等
// ==========================================

use crate::domain::types::{RatioCell, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 年度计数表 (Year Count Table)
// ==========================================
// 按调用方给定的键序排列, 每个请求键必有一项, 缺失组合记 0
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearCountTable {
    pub entries: Vec<(Year, u64)>,
}

impl YearCountTable {
    pub fn get(&self, year: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(y, _)| y == year)
            .map(|(_, c)| *c)
    }

    /// 键序 (与构建时的请求键序一致)
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(y, _)| y.as_str())
    }

    /// 全表计数之和 (覆盖性键集下等于记录总数)
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// 月度计数表 (Month Count Table)
// ==========================================
// 外层键: 数据中出现过的年份 (注意: 不是调用方请求的键集);
// 内层键: 12 个规范月份码全量铺开
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthCountTable {
    pub years: BTreeMap<Year, BTreeMap<String, u64>>,
}

impl MonthCountTable {
    pub fn get(&self, year: &str, month: &str) -> Option<u64> {
        self.years.get(year).and_then(|m| m.get(month)).copied()
    }

    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(|y| y.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

// ==========================================
// 年度比率表 (Year Ratio Table)
// ==========================================
// 键序跟随分子表; 分母缺键或为 0 时单元格为 Missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YearRatioTable {
    pub entries: Vec<(Year, RatioCell)>,
}

impl YearRatioTable {
    pub fn get(&self, year: &str) -> Option<RatioCell> {
        self.entries
            .iter()
            .find(|(y, _)| y == year)
            .map(|(_, c)| *c)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// 月度比率表 (Month Ratio Table)
// ==========================================
// 只收录两表共有年份; 分母为 0 的月份整体省略 (无占位),
// 与年度口径的 Missing 策略是有意的不对称
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthRatioTable {
    pub years: BTreeMap<Year, BTreeMap<String, f64>>,
}

impl MonthRatioTable {
    pub fn get(&self, year: &str, month: &str) -> Option<f64> {
        self.years.get(year).and_then(|m| m.get(month)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

// ==========================================
// 供应商计数表 (Vendor Count Table)
// ==========================================
// (供应商, 年份) -> 计数; 供应商标识逐字保留 (区分大小写),
// 年份只保留纯数字键
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VendorCountTable {
    pub vendors: BTreeMap<String, BTreeMap<Year, u64>>,
}

impl VendorCountTable {
    pub fn get(&self, vendor: &str, year: &str) -> Option<u64> {
        self.vendors.get(vendor).and_then(|m| m.get(year)).copied()
    }

    pub fn vendors(&self) -> impl Iterator<Item = &str> {
        self.vendors.keys().map(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

// ==========================================
// 供应商比率表 (Vendor Ratio Table)
// ==========================================
// 行集 = DMR 流中观察到的供应商集合;
// 只出现在 PO 流中的供应商不会有行 (沿用既有报表口径)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VendorRatioTable {
    pub vendors: BTreeMap<String, BTreeMap<Year, RatioCell>>,
}

impl VendorRatioTable {
    pub fn get(&self, vendor: &str, year: &str) -> Option<RatioCell> {
        self.vendors.get(vendor).and_then(|m| m.get(year)).copied()
    }

    pub fn vendors(&self) -> impl Iterator<Item = &str> {
        self.vendors.keys().map(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

// ==========================================
// 头部排名项 (Top Ratio Entry)
// ==========================================
// ratio 为原始值 (未舍入), 展示时再保留 1 位小数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRatioEntry {
    pub vendor: String,
    pub ratio: f64,
}

// ==========================================
// PBC 序列 (Process Behavior Chart Series)
// ==========================================

/// PBC 单点: 某供应商某年中一个有数据的月份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PbcPoint {
    /// "YYYY-MM"
    pub year_month: String,
    /// 当月 DMR 条数
    pub count: u64,
    /// 移动极差: 首点为 0, 其余为与前一点的绝对差
    pub moving_range: u64,
}

/// PBC 序列: 逐点数据 + 广播到全序列的统计线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PbcSeries {
    pub vendor: String,
    pub year: i32,
    pub points: Vec<PbcPoint>,
    pub mean: f64,
    /// 注意: 既有报表口径取"最后一个移动极差", 不是全序列均值
    pub avg_moving_range: f64,
    pub upl: f64,
    pub lpl: f64,
    pub url: f64,
}

impl PbcSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
