// ==========================================
// 供应商质量比率系统 - 比率计算引擎
// ==========================================
// 职责: 把两张计数表 (分子=DMR, 分母=PO) 合成百分比比率表
// 输出: YearRatioTable / MonthRatioTable / VendorRatioTable
// ==========================================
// 口径说明 (三种粒度的缺失/零分母策略不同, 均为既有报表行为):
// - 年度:   分母缺键 -> Missing; 分母为 0 -> Missing (不得除零崩溃)
// - 月度:   只收录两表共有年份; 分母为 0 的月份整体省略, 无占位
// - 供应商: (供应商,年份) 对在分母表缺失 -> Missing;
//           存在但为 0 -> 省略 (同月度)
// ==========================================

use crate::domain::{
    MonthCountTable, MonthRatioTable, RatioCell, VendorCountTable, VendorRatioTable,
    YearCountTable, YearRatioTable,
};
use std::collections::BTreeMap;

// ==========================================
// RatioEngine - 比率计算引擎
// ==========================================
pub struct RatioEngine {
    // 无状态引擎, 不需要注入依赖
}

impl RatioEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 年度比率
    ///
    /// 按分子表键序逐年计算 (分子/分母)×100:
    /// - 分母表无该年份 -> Missing
    /// - 分母为 0 -> Missing (下游无法渲染无穷大)
    ///
    /// 结果保留原始值, 舍入推迟到展示边界
    pub fn year_ratio(&self, numerator: &YearCountTable, denominator: &YearCountTable) -> YearRatioTable {
        let entries = numerator
            .entries
            .iter()
            .map(|(year, num_count)| {
                let cell = match denominator.get(year) {
                    Some(0) | None => RatioCell::Missing,
                    Some(den_count) => {
                        RatioCell::Value(*num_count as f64 / den_count as f64 * 100.0)
                    }
                };
                (year.clone(), cell)
            })
            .collect();

        YearRatioTable { entries }
    }

    /// 月度比率
    ///
    /// 对两表共有的每个年份, 逐月计算; 分母为 0 的月份直接省略
    /// (不产生 Missing 占位, 与年度口径的不对称是有意保留的)
    pub fn month_ratio(
        &self,
        numerator: &MonthCountTable,
        denominator: &MonthCountTable,
    ) -> MonthRatioTable {
        let mut years: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

        for (year, den_months) in &denominator.years {
            let Some(num_months) = numerator.years.get(year) else {
                continue;
            };

            let mut ratios: BTreeMap<String, f64> = BTreeMap::new();
            for (month, den_count) in den_months {
                if *den_count == 0 {
                    continue;
                }
                let num_count = num_months.get(month).copied().unwrap_or(0);
                ratios.insert(
                    month.clone(),
                    num_count as f64 / *den_count as f64 * 100.0,
                );
            }

            // 共有年份必有条目 (哪怕全年分母为 0, 留一个空月份表)
            years.insert(year.clone(), ratios);
        }

        MonthRatioTable { years }
    }

    /// 供应商比率
    ///
    /// 行集跟随分子 (DMR) 表: 只在 PO 流出现的供应商不会有行;
    /// (供应商,年份) 对在分母表缺失 -> Missing, 存在但为 0 -> 省略
    ///
    /// 注意: 此处的供应商连接是区分大小写的逐字匹配
    /// (大写归一化只发生在 PBC 过滤路径, 沿用既有报表口径)
    pub fn vendor_ratio(
        &self,
        numerator: &VendorCountTable,
        denominator: &VendorCountTable,
    ) -> VendorRatioTable {
        let mut vendors: BTreeMap<String, BTreeMap<String, RatioCell>> = BTreeMap::new();

        for (vendor, dmr_years) in &numerator.vendors {
            let row = vendors.entry(vendor.clone()).or_default();

            for (year, dmr_count) in dmr_years {
                match denominator.get(vendor, year) {
                    Some(po_count) if po_count != 0 => {
                        row.insert(
                            year.clone(),
                            RatioCell::Value(*dmr_count as f64 / po_count as f64 * 100.0),
                        );
                    }
                    Some(_) => {
                        // 分母存在但为 0: 省略该单元格
                    }
                    None => {
                        row.insert(year.clone(), RatioCell::Missing);
                    }
                }
            }
        }

        VendorRatioTable { vendors }
    }
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_table(entries: &[(&str, u64)]) -> YearCountTable {
        YearCountTable {
            entries: entries.iter().map(|(y, c)| (y.to_string(), *c)).collect(),
        }
    }

    fn month_table(years: &[(&str, &[(&str, u64)])]) -> MonthCountTable {
        MonthCountTable {
            years: years
                .iter()
                .map(|(y, months)| {
                    (
                        y.to_string(),
                        months.iter().map(|(m, c)| (m.to_string(), *c)).collect(),
                    )
                })
                .collect(),
        }
    }

    fn vendor_table(rows: &[(&str, &[(&str, u64)])]) -> VendorCountTable {
        VendorCountTable {
            vendors: rows
                .iter()
                .map(|(v, years)| {
                    (
                        v.to_string(),
                        years.iter().map(|(y, c)| (y.to_string(), *c)).collect(),
                    )
                })
                .collect(),
        }
    }

    // ==========================================
    // 年度口径
    // ==========================================

    #[test]
    fn test_year_ratio_basic() {
        let engine = RatioEngine::new();
        let dmr = year_table(&[("2023", 10)]);
        let po = year_table(&[("2023", 100)]);

        let table = engine.year_ratio(&dmr, &po);

        assert_eq!(table.get("2023"), Some(RatioCell::Value(10.0)));
    }

    #[test]
    fn test_year_ratio_missing_denominator_key() {
        let engine = RatioEngine::new();
        let dmr = year_table(&[("2023", 10)]);
        let po = year_table(&[]);

        let table = engine.year_ratio(&dmr, &po);

        // 分母缺键 iff Missing
        assert_eq!(table.get("2023"), Some(RatioCell::Missing));
    }

    #[test]
    fn test_year_ratio_zero_denominator_is_missing_not_fault() {
        let engine = RatioEngine::new();
        let dmr = year_table(&[("2023", 5)]);
        let po = year_table(&[("2023", 0)]);

        let table = engine.year_ratio(&dmr, &po);

        assert_eq!(table.get("2023"), Some(RatioCell::Missing));
    }

    #[test]
    fn test_year_ratio_keeps_numerator_key_order() {
        let engine = RatioEngine::new();
        let dmr = year_table(&[("2024", 1), ("2022", 2), ("2023", 3)]);
        let po = year_table(&[("2022", 10), ("2023", 10), ("2024", 10)]);

        let table = engine.year_ratio(&dmr, &po);

        let years: Vec<&str> = table.entries.iter().map(|(y, _)| y.as_str()).collect();
        assert_eq!(years, vec!["2024", "2022", "2023"]);
    }

    #[test]
    fn test_year_ratio_empty_inputs() {
        let engine = RatioEngine::new();
        let table = engine.year_ratio(&year_table(&[]), &year_table(&[]));
        assert!(table.is_empty());
    }

    // ==========================================
    // 月度口径
    // ==========================================

    #[test]
    fn test_month_ratio_zero_denominator_omitted() {
        let engine = RatioEngine::new();
        let dmr = month_table(&[("2023", &[("01", 5), ("02", 3)])]);
        let po = month_table(&[("2023", &[("01", 0), ("02", 10)])]);

        let table = engine.month_ratio(&dmr, &po);

        // 分母为 0 的月份整体缺席, 不是 Missing 占位
        assert_eq!(table.get("2023", "01"), None);
        assert_eq!(table.get("2023", "02"), Some(30.0));
    }

    #[test]
    fn test_month_ratio_only_common_years() {
        let engine = RatioEngine::new();
        let dmr = month_table(&[("2022", &[("01", 1)]), ("2023", &[("01", 2)])]);
        let po = month_table(&[("2023", &[("01", 4)]), ("2024", &[("01", 8)])]);

        let table = engine.month_ratio(&dmr, &po);

        assert!(table.years.contains_key("2023"));
        assert!(!table.years.contains_key("2022"));
        assert!(!table.years.contains_key("2024"));
        assert_eq!(table.get("2023", "01"), Some(50.0));
    }

    #[test]
    fn test_month_ratio_empty_inputs() {
        let engine = RatioEngine::new();
        let table = engine.month_ratio(&month_table(&[]), &month_table(&[]));
        assert!(table.is_empty());
    }

    // ==========================================
    // 供应商口径
    // ==========================================

    #[test]
    fn test_vendor_ratio_rows_follow_dmr_vendor_set() {
        let engine = RatioEngine::new();
        let dmr = vendor_table(&[("ACME", &[("2023", 2)])]);
        let po = vendor_table(&[("ACME", &[("2023", 40)]), ("OTHER", &[("2023", 10)])]);

        let table = engine.vendor_ratio(&dmr, &po);

        // 只在 PO 流出现的供应商没有行 (不对称, 沿用既有口径)
        assert_eq!(table.get("ACME", "2023"), Some(RatioCell::Value(5.0)));
        assert!(table.vendors.get("OTHER").is_none());
    }

    #[test]
    fn test_vendor_ratio_missing_pair_is_missing() {
        let engine = RatioEngine::new();
        let dmr = vendor_table(&[("ACME", &[("2023", 2), ("2024", 1)])]);
        let po = vendor_table(&[("ACME", &[("2023", 10)])]);

        let table = engine.vendor_ratio(&dmr, &po);

        assert_eq!(table.get("ACME", "2023"), Some(RatioCell::Value(20.0)));
        assert_eq!(table.get("ACME", "2024"), Some(RatioCell::Missing));
    }

    #[test]
    fn test_vendor_ratio_zero_denominator_omitted() {
        let engine = RatioEngine::new();
        let dmr = vendor_table(&[("ACME", &[("2023", 2)])]);
        let po = vendor_table(&[("ACME", &[("2023", 0)])]);

        let table = engine.vendor_ratio(&dmr, &po);

        // 分母存在但为 0: 单元格省略 (同月度口径)
        assert_eq!(table.get("ACME", "2023"), None);
        // 行本身仍然存在 (行集 = DMR 供应商集)
        assert!(table.vendors.contains_key("ACME"));
    }

    #[test]
    fn test_vendor_ratio_join_is_case_sensitive() {
        let engine = RatioEngine::new();
        let dmr = vendor_table(&[("Acme", &[("2023", 2)])]);
        let po = vendor_table(&[("ACME", &[("2023", 10)])]);

        let table = engine.vendor_ratio(&dmr, &po);

        // 大小写不一致时连接不上 -> Missing (既有口径, 疑似缺陷但保留)
        assert_eq!(table.get("Acme", "2023"), Some(RatioCell::Missing));
    }
}
