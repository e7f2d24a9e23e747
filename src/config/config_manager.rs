// ==========================================
// 保质期库存监控系统 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写
// 优先级: 默认值 < JSON 配置文件 < 环境变量
// ==========================================

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::freshness::DEFAULT_WARNING_WINDOW_DAYS;

/// 数据集路径环境变量（便于调试/测试/CI）
pub const ENV_DATASET_PATH: &str = "EXPIRY_INVENTORY_DATASET";

/// 临期窗口环境变量（天）
pub const ENV_WARNING_DAYS: &str = "EXPIRY_INVENTORY_WARNING_DAYS";

// ==========================================
// AppConfig - 应用配置
// ==========================================

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 数据集文件路径（缺省时由应用层解析默认位置）
    pub dataset_path: Option<String>,
    /// 临期窗口（天）,边界含端点
    pub warning_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            warning_window_days: DEFAULT_WARNING_WINDOW_DAYS,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 加载配置: 默认值 → 可选 JSON 文件 → 环境变量覆写
    ///
    /// 配置缺陷一律降级为默认值并告警,不阻断启动。
    pub fn load(config_file: Option<&Path>) -> AppConfig {
        let mut config = AppConfig::default();

        if let Some(path) = config_file {
            config = Self::load_file(path).unwrap_or_else(|e| {
                tracing::warn!("配置文件读取失败(使用默认配置): {}", e);
                AppConfig::default()
            });
        }

        Self::apply_env_overrides(&mut config);
        config
    }

    /// 读取 JSON 配置文件
    fn load_file(path: &Path) -> Result<AppConfig, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// 应用环境变量覆写
    fn apply_env_overrides(config: &mut AppConfig) {
        if let Ok(path) = std::env::var(ENV_DATASET_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                config.dataset_path = Some(trimmed.to_string());
            }
        }

        if let Ok(days) = std::env::var(ENV_WARNING_DAYS) {
            match days.trim().parse::<i64>() {
                Ok(value) if value >= 0 => config.warning_window_days = value,
                _ => {
                    tracing::warn!(
                        "环境变量 {} 的值非法(保持 {} 天): {}",
                        ENV_WARNING_DAYS,
                        config.warning_window_days,
                        days
                    );
                }
            }
        }
    }
}
