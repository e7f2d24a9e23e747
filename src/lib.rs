// ==========================================
// 保质期库存监控系统 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel 数据集
// 系统定位: 新鲜度分级与批次查询引擎
// 消费方: 监控驾驶舱 + 扫码打包工作台
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 进程装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FreshnessStatus, LoadState};

// 领域实体
pub use domain::{InventorySet, LotRecord, RawLotRecord};

// 引擎
pub use engine::{FreshnessEngine, InventoryQueryEngine, InventoryStore, QueryError};

// 导入
pub use importer::{InventoryLoader, LoadReport};

// API
pub use api::{ApiError, ApiResult, InventoryApi, StatusSummary};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "保质期库存监控系统";
