// ==========================================
// 供应商质量比率系统 - 引擎层
// ==========================================
// 职责: 聚合与比率的纯计算引擎, 不做文件 I/O
// 红线: 引擎是纯函数, 相同输入必产出相同输出
//       (展示层可按输入内容安全缓存)
// ==========================================

pub mod pbc;
pub mod period;
pub mod ratio;
pub mod temporal;
pub mod vendor;

// 重导出核心引擎
pub use pbc::PbcEngine;
pub use period::PeriodCounter;
pub use ratio::RatioEngine;
pub use temporal::{month_key, unique_years, year_key};
pub use vendor::VendorAggregator;
