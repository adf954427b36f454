// ==========================================
// 供应商质量比率系统 - API 层
// ==========================================
// 职责: 面向导出/看板协作方的业务接口
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod report_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use report_api::{ReportApi, SqrReport};
