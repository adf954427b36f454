// ==========================================
// 供应商质量比率系统 - 运行配置
// ==========================================
// 职责: 配置加载与默认值
// 存储: JSON 配置文件 (serde), 缺省字段取默认值
// ==========================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// ColumnMapping - 台账列映射
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// 日期列表头
    pub date_column: String,
    /// 供应商列表头
    pub vendor_column: String,
}

// ==========================================
// SqrConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqrConfig {
    /// DMR 台账路径 (Excel)
    pub dmr_log_path: PathBuf,
    /// 供应商 PO 台账路径 (CSV)
    pub po_log_path: PathBuf,
    /// 重点供应商清单路径 (单列 CSV), 可缺省
    pub key_suppliers_path: Option<PathBuf>,
    /// 报表导出目录
    pub output_dir: PathBuf,
    /// DMR 台账列映射
    pub dmr_columns: ColumnMapping,
    /// PO 台账列映射
    pub po_columns: ColumnMapping,
    /// 柱状图头部排名条数
    pub top_n: usize,
}

impl Default for SqrConfig {
    fn default() -> Self {
        // 默认列表头沿用既有台账的原始写法
        Self {
            dmr_log_path: PathBuf::from("DMR MASTER LIST - USE THIS LOG.xlsx"),
            po_log_path: PathBuf::from("Supplier PO List.csv"),
            key_suppliers_path: None,
            output_dir: PathBuf::from("sqr_report"),
            dmr_columns: ColumnMapping {
                date_column: "Date".to_string(),
                vendor_column: "Vendor".to_string(),
            },
            po_columns: ColumnMapping {
                date_column: "P.O. Date".to_string(),
                vendor_column: "Vendor Name".to_string(),
            },
            top_n: 8,
        }
    }
}

impl SqrConfig {
    /// 从 JSON 配置文件加载, 缺省字段取默认值
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("配置文件读取失败: {}", path.display()))?;
        let config: SqrConfig = serde_json::from_str(&raw)
            .with_context(|| format!("配置文件解析失败: {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置; 文件不存在时回落到默认配置
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "配置文件不存在, 使用默认配置");
            Ok(Self::default())
        }
    }
}
