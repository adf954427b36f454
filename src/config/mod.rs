// ==========================================
// 供应商质量比率系统 - 配置层
// ==========================================
// 职责: 输入台账路径、列映射、导出目录等运行配置
// ==========================================

pub mod sqr_config;

pub use sqr_config::{ColumnMapping, SqrConfig};
