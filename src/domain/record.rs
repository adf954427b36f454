// ==========================================
// 供应商质量比率系统 - 源记录定义
// ==========================================
// 职责: DMR / PO 两条事件流的统一记录形态
// 红线: 记录不可变, 每次运行从输入流整体重建,
//       本层不做日期校验 (宽松策略, 见引擎层)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SourceRecord - 单条缺陷报告或采购订单
// ==========================================
// 两种记录同形, 来源身份由所在流决定 (DMR 流 / PO 流)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// 事件日期, ISO 风格字符串 (`YYYY-MM-DD...`), 由导入层归一化
    pub date: String,

    /// 供应商标识, 逐字保留 (区分大小写);
    /// 只有 PBC 过滤路径会做大写归一化
    pub vendor: String,
}

impl SourceRecord {
    pub fn new(date: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            vendor: vendor.into(),
        }
    }
}
