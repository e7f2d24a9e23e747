// ==========================================
// 保质期库存监控系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎
// 红线: 规则纯函数化,装载后库存集只读
// ==========================================

pub mod freshness;
pub mod query;
pub mod store;

// 重导出核心引擎
pub use freshness::FreshnessEngine;
pub use query::{InventoryQueryEngine, QueryError, QueryResult};
pub use store::InventoryStore;
