// ==========================================
// 保质期库存监控系统 - 应用层
// ==========================================
// 职责: 进程装配与启动顺序控制
// ==========================================

pub mod state;

pub use state::{get_default_dataset_path, AppState};
