// ==========================================
// 保质期库存监控系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod lot;
pub mod types;

// 重导出核心类型
pub use lot::{InventorySet, LotRecord, RawLotRecord};
pub use types::{FreshnessStatus, LoadState};
