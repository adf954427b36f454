// ==========================================
// 供应商质量比率系统 - API层错误类型
// ==========================================
// 职责: 面向展示层的可恢复错误 (渲染为警告, 不终止会话)
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 所选供应商/年份组合没有任何 DMR 数据点
    #[error("所选组合无数据: vendor={vendor}, year={year}, 请更换供应商或年份")]
    EmptySelection { vendor: String, year: i32 },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
