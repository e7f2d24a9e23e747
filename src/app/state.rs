// ==========================================
// 保质期库存监控系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 装配顺序: 存储 → 查询API → 装载器 (读者在就绪前被统一拒绝)
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::InventoryApi;
use crate::config::AppConfig;
use crate::engine::store::InventoryStore;
use crate::importer::{InventoryLoader, LoadReport};

/// 应用状态
///
/// 持有共享的库存存储与各组件实例。
/// 装载器与查询API通过同一 InventoryStore 关联:
/// 装载完成前所有查询统一收到"未就绪"。
pub struct AppState {
    /// 共享库存存储
    pub store: Arc<InventoryStore>,

    /// 库存查询API
    pub inventory_api: Arc<InventoryApi>,

    /// 库存装载器（每进程只运行一次）
    loader: InventoryLoader,
}

impl AppState {
    /// 创建新的AppState实例
    pub fn new(config: &AppConfig) -> Self {
        tracing::info!(
            "初始化AppState, 临期窗口={}天",
            config.warning_window_days
        );

        let store = Arc::new(InventoryStore::new());
        let inventory_api = Arc::new(InventoryApi::new(store.clone()));
        let loader = InventoryLoader::new(store.clone(), config.warning_window_days);

        Self {
            store,
            inventory_api,
            loader,
        }
    }

    /// 执行一次性数据集装载
    ///
    /// 失败时只记录日志,存储保持未就绪,进程不崩溃。
    pub fn load_dataset(&self, path: &std::path::Path) -> Option<LoadReport> {
        self.loader.run(path)
    }
}

// ==========================================
// 默认数据集路径辅助函数
// ==========================================

/// 获取默认数据集路径
///
/// 解析顺序:
/// 1. 环境变量 EXPIRY_INVENTORY_DATASET（便于调试/测试/CI）
/// 2. 配置文件中的 dataset_path
/// 3. 用户数据目录下 expiry-inventory/inventory.csv
/// 4. 当前目录 ./inventory.csv
pub fn get_default_dataset_path(config: &AppConfig) -> PathBuf {
    if let Ok(path) = std::env::var(crate::config::config_manager::ENV_DATASET_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(path) = &config.dataset_path {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("expiry-inventory").join("inventory.csv");
    }

    PathBuf::from("./inventory.csv")
}
