// ==========================================
// 供应商质量比率系统 - 核心库
// ==========================================
// 系统定位: 质量决策支持系统
// 计算口径: SQR = (DMR 条数 / PO 条数) × 100
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 聚合与比率计算
pub mod engine;

// 导入层 - 台账文件解析
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 导出层 - 报表落盘
pub mod export;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    MonthCountTable, MonthRatioTable, PbcPoint, PbcSeries, RatioCell, SourceRecord,
    TopRatioEntry, VendorCountTable, VendorRatioTable, YearCountTable, YearRatioTable,
};

// 引擎
pub use engine::{PbcEngine, PeriodCounter, RatioEngine, VendorAggregator};

// API
pub use api::{ApiError, DashboardApi, ReportApi, SqrReport};

// 配置
pub use config::{ColumnMapping, SqrConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商质量比率系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
