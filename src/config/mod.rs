// ==========================================
// 保质期库存监控系统 - 配置层
// ==========================================
// 职责: 系统配置装载与覆写
// ==========================================

pub mod config_manager;

pub use config_manager::{AppConfig, ConfigManager};
