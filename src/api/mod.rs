// ==========================================
// 保质期库存监控系统 - API 层
// ==========================================
// 职责: 面向驾驶舱/扫码端的业务接口
// 架构: API 层 → 引擎层 (查询引擎/新鲜度引擎)
// ==========================================

pub mod error;
pub mod inventory_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use inventory_api::{InventoryApi, StatusSummary};
