// ==========================================
// 供应商质量比率系统 - 时间键提取
// ==========================================
// 职责: 从日期字符串派生年/月键
// 输入: 导入层归一化后的 ISO 风格日期串 (`YYYY-MM-DD...`)
// 红线: 本层不做日期校验 (宽松策略);
//       畸形串产生的短键只是匹配不到任何时间键
// ==========================================

use crate::domain::Year;

/// 年份键: 日期串前 4 个字符; 不足 4 个字符时整串原样作键
pub fn year_key(date: &str) -> &str {
    date.get(0..4).unwrap_or(date)
}

/// 月份键: 日期串第 6..8 个字符 ("01".."12"); 不足时为空串
pub fn month_key(date: &str) -> &str {
    date.get(5..7).unwrap_or("")
}

/// 提取去重后的年份键, 保持首次出现顺序
pub fn unique_years<'a>(dates: impl IntoIterator<Item = &'a str>) -> Vec<Year> {
    let mut years: Vec<Year> = Vec::new();
    for date in dates {
        let year = year_key(date);
        if !years.iter().any(|y| y == year) {
            years.push(year.to_string());
        }
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_key_extraction() {
        assert_eq!(year_key("2023-05-06"), "2023");
        assert_eq!(year_key("2023-05-06 00:00:00"), "2023");
        // 畸形短串: 整串作键
        assert_eq!(year_key("20"), "20");
        assert_eq!(year_key(""), "");
    }

    #[test]
    fn test_month_key_extraction() {
        assert_eq!(month_key("2023-05-06"), "05");
        assert_eq!(month_key("2023-12-31"), "12");
        assert_eq!(month_key("2023"), "");
    }

    #[test]
    fn test_unique_years_first_seen_order() {
        let dates = ["2024-01-02", "2023-05-06", "2024-07-08", "2022-01-01"];
        let years = unique_years(dates);
        assert_eq!(years, vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_unique_years_keeps_malformed_keys() {
        // 畸形串照常通过, 由下游容忍匹配不到
        let dates = ["bad", "2023-01-01", "bad"];
        let years = unique_years(dates);
        assert_eq!(years, vec!["bad", "2023"]);
    }
}
