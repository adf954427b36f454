// ==========================================
// 供应商质量比率系统 - 领域模型层
// ==========================================
// 职责: 定义源记录、时间键、派生表等领域实体
// 红线: 不含文件访问逻辑, 不含引擎逻辑
// ==========================================

pub mod record;
pub mod tables;
pub mod types;

// 重导出核心类型
pub use record::SourceRecord;
pub use tables::{
    MonthCountTable, MonthRatioTable, PbcPoint, PbcSeries, TopRatioEntry, VendorCountTable,
    VendorRatioTable, YearCountTable, YearRatioTable,
};
pub use types::{is_digit_year, round_1dp, MonthCode, RatioCell, Year, MONTH_CODES};
