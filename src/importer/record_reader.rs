// ==========================================
// 供应商质量比率系统 - 源记录读取器
// ==========================================
// 职责: 把原始行映射成 SourceRecord 流
// 口径: 日期尽力归一化成 ISO 风格 (`YYYY-MM-DD`),
//       归一化失败的原值照常通过 (宽松策略, 由引擎层容忍);
//       供应商标识逐字保留
// ==========================================

use crate::domain::SourceRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use chrono::NaiveDate;

// ==========================================
// RecordReader - 列映射与归一化
// ==========================================
pub struct RecordReader {
    date_column: String,
    vendor_column: String,
}

impl RecordReader {
    /// # 参数
    /// - `date_column`: 日期列表头 (如 "Date" / "P.O. Date")
    /// - `vendor_column`: 供应商列表头 (如 "Vendor" / "Vendor Name")
    pub fn new(date_column: impl Into<String>, vendor_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
            vendor_column: vendor_column.into(),
        }
    }

    /// 把原始行映射成记录流
    ///
    /// - 只消费配置的两列, "Unnamed" 等无名列自然被丢弃
    /// - 非空数据下两列表头都找不到时报 MissingColumn
    /// - 日期/供应商为空的行照常产出 (空日期匹配不到任何时间键)
    pub fn read_records(&self, rows: &[RawRow], file_label: &str) -> ImportResult<Vec<SourceRecord>> {
        if let Some(first) = rows.first() {
            for column in [&self.date_column, &self.vendor_column] {
                if !first.contains_key(column.as_str()) {
                    return Err(ImportError::MissingColumn {
                        file: file_label.to_string(),
                        column: column.clone(),
                    });
                }
            }
        }

        let records = rows
            .iter()
            .map(|row| {
                let date = row.get(&self.date_column).map(String::as_str).unwrap_or("");
                let vendor = row
                    .get(&self.vendor_column)
                    .map(String::as_str)
                    .unwrap_or("");
                SourceRecord::new(normalize_date(date), vendor)
            })
            .collect();

        Ok(records)
    }
}

/// 日期归一化: 常见格式统一转 `YYYY-MM-DD`, 失败时原值通过
///
/// 覆盖原始台账中出现过的写法:
/// ISO 带/不带时间、美式斜杠 (4 位年 / 2 位年)
fn normalize_date(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    // ISO 带时间: 取前 10 个字符
    if let Some(head) = value.get(0..10) {
        if NaiveDate::parse_from_str(head, "%Y-%m-%d").is_ok() {
            return head.to_string();
        }
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    value.to_string()
}

/// 读取重点供应商清单 (单列 CSV), 统一大写
///
/// 用于 PBC 看板过滤供应商选项
pub fn load_key_suppliers(rows: &[RawRow]) -> Vec<String> {
    let mut suppliers: Vec<String> = Vec::new();
    for row in rows {
        for value in row.values() {
            let name = value.trim().to_uppercase();
            if !name.is_empty() && !suppliers.contains(&name) {
                suppliers.push(name);
            }
        }
    }
    suppliers.sort();
    suppliers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_read_records_maps_configured_columns() {
        let reader = RecordReader::new("P.O. Date", "Vendor Name");
        let rows = vec![
            row(&[("P.O. Date", "2023-05-06"), ("Vendor Name", "ACME"), ("Unnamed: 3", "x")]),
            row(&[("P.O. Date", "2024-01-01"), ("Vendor Name", "Widgets Inc")]),
        ];

        let records = reader.read_records(&rows, "PO 台账").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], SourceRecord::new("2023-05-06", "ACME"));
        assert_eq!(records[1].vendor, "Widgets Inc");
    }

    #[test]
    fn test_read_records_missing_column() {
        let reader = RecordReader::new("Date", "Vendor");
        let rows = vec![row(&[("Other", "x")])];

        let err = reader.read_records(&rows, "DMR 台账").unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn { .. }));
    }

    #[test]
    fn test_read_records_empty_input() {
        let reader = RecordReader::new("Date", "Vendor");
        let records = reader.read_records(&[], "DMR 台账").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_normalize_date_variants() {
        assert_eq!(normalize_date("2023-05-06"), "2023-05-06");
        assert_eq!(normalize_date("2023-05-06 00:00:00"), "2023-05-06");
        assert_eq!(normalize_date("5/6/2023"), "2023-05-06");
        assert_eq!(normalize_date("2023/05/06"), "2023-05-06");
        // 归一化失败: 原值通过, 由引擎层容忍
        assert_eq!(normalize_date("NaT"), "NaT");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_load_key_suppliers_uppercased_and_deduped() {
        let rows = vec![
            row(&[("Top 20 Key Suppliers", "Acme")]),
            row(&[("Top 20 Key Suppliers", "ACME")]),
            row(&[("Top 20 Key Suppliers", "widgets inc")]),
        ];

        let suppliers = load_key_suppliers(&rows);
        assert_eq!(suppliers, vec!["ACME".to_string(), "WIDGETS INC".to_string()]);
    }
}
