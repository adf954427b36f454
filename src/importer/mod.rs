// ==========================================
// 供应商质量比率系统 - 导入层
// ==========================================
// 职责: 把 DMR Excel 台账 / PO CSV 台账 / 重点供应商清单
//       解析成内存中的记录流; 计算层不做任何文件 I/O
// ==========================================

pub mod error;
pub mod file_parser;
pub mod record_reader;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvLogParser, ExcelLogParser, RawRow};
pub use record_reader::{load_key_suppliers, RecordReader};

use crate::domain::SourceRecord;
use std::path::Path;

/// 导入 DMR 台账 (Excel)
///
/// # 参数
/// - `path`: 台账文件路径 (.xlsx/.xls)
/// - `date_column` / `vendor_column`: 列表头 (见 SqrConfig)
pub fn import_dmr_log(
    path: &Path,
    date_column: &str,
    vendor_column: &str,
) -> ImportResult<Vec<SourceRecord>> {
    let rows = ExcelLogParser.parse_to_raw_rows(path)?;
    let records = RecordReader::new(date_column, vendor_column).read_records(&rows, "DMR 台账")?;
    tracing::info!(path = %path.display(), rows = records.len(), "DMR 台账导入完成");
    Ok(records)
}

/// 导入供应商 PO 台账 (CSV)
pub fn import_po_log(
    path: &Path,
    date_column: &str,
    vendor_column: &str,
) -> ImportResult<Vec<SourceRecord>> {
    let rows = CsvLogParser.parse_to_raw_rows(path)?;
    let records = RecordReader::new(date_column, vendor_column).read_records(&rows, "PO 台账")?;
    tracing::info!(path = %path.display(), rows = records.len(), "PO 台账导入完成");
    Ok(records)
}

/// 导入重点供应商清单 (单列 CSV, 统一大写)
pub fn import_key_suppliers(path: &Path) -> ImportResult<Vec<String>> {
    let rows = CsvLogParser.parse_to_raw_rows(path)?;
    let suppliers = load_key_suppliers(&rows);
    tracing::info!(path = %path.display(), suppliers = suppliers.len(), "重点供应商清单导入完成");
    Ok(suppliers)
}
