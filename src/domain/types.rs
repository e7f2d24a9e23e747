// ==========================================
// 保质期库存监控系统 - 领域类型定义
// ==========================================
// 红线: 新鲜度是"等级制",不是评分制
// ==========================================

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::lot::InventorySet;

// ==========================================
// 新鲜度状态 (Freshness Status)
// ==========================================
// 顺序: Expired < Warning < Ok (距离过期越远越"新鲜")
// 序列化格式: 小写 (与驾驶舱/扫码端约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    Expired, // 已过期
    Warning, // 临期(含当天过期)
    Ok,      // 正常
}

impl fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreshnessStatus::Expired => write!(f, "expired"),
            FreshnessStatus::Warning => write!(f, "warning"),
            FreshnessStatus::Ok => write!(f, "ok"),
        }
    }
}

impl FreshnessStatus {
    /// 从字符串解析状态（未知值视为 Ok）
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "expired" => FreshnessStatus::Expired,
            "warning" => FreshnessStatus::Warning,
            _ => FreshnessStatus::Ok,
        }
    }
}

// ==========================================
// 装载状态 (Load State)
// ==========================================
// 进程级就绪标志的显式状态对象:
// - Loading: 数据集尚未装载完成(或装载已失败),所有查询返回"未就绪"
// - Ready:   装载完成,持有只读库存集快照,此后不再变更
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<InventorySet>),
}

impl LoadState {
    /// 是否已就绪
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    /// 就绪后的记录数（未就绪返回 None）
    pub fn record_count(&self) -> Option<usize> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(set) => Some(set.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordering() {
        assert!(FreshnessStatus::Expired < FreshnessStatus::Warning);
        assert!(FreshnessStatus::Warning < FreshnessStatus::Ok);
    }

    #[test]
    fn test_status_display_lowercase() {
        assert_eq!(FreshnessStatus::Expired.to_string(), "expired");
        assert_eq!(FreshnessStatus::Warning.to_string(), "warning");
        assert_eq!(FreshnessStatus::Ok.to_string(), "ok");
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&FreshnessStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let parsed: FreshnessStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(parsed, FreshnessStatus::Expired);
    }

    #[test]
    fn test_load_state_record_count() {
        let loading = LoadState::Loading;
        assert!(!loading.is_ready());
        assert_eq!(loading.record_count(), None);

        let ready = LoadState::Ready(Arc::new(InventorySet::default()));
        assert!(ready.is_ready());
        assert_eq!(ready.record_count(), Some(0));
    }
}
