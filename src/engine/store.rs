// ==========================================
// 保质期库存监控系统 - 库存状态存储
// ==========================================
// 职责: 持有进程级装载状态 {Loading, Ready(set)}
// 并发模型: 单写者(Loader,发布一次) / 多读者(发布后无锁争用)
// ==========================================

use std::sync::{Arc, RwLock};

use crate::domain::lot::InventorySet;
use crate::domain::types::LoadState;

/// 库存状态存储
///
/// 就绪标志的显式状态对象:所有查询入口统一经 snapshot() 原子判定,
/// 避免散落在调用方的布尔检查。装载失败时状态永久停留在 Loading,
/// 进程保持存活但对所有查询返回"未就绪"。
pub struct InventoryStore {
    state: RwLock<LoadState>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// 创建未就绪的存储
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoadState::Loading),
        }
    }

    /// 发布装载完成的库存集,就绪标志恰好翻转一次
    ///
    /// 仅供 Loader 在装载流结束时调用;重复发布属于编程错误,
    /// 直接忽略并记录日志,已发布的集合不被替换。
    pub fn publish(&self, set: Arc<InventorySet>) {
        let mut state = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if state.is_ready() {
            tracing::warn!("库存集重复发布被忽略(装载流程只允许运行一次)");
            return;
        }

        tracing::info!("库存集装载完成, 共 {} 条记录进入内存", set.len());
        *state = LoadState::Ready(set);
    }

    /// 取当前快照;未就绪返回 None
    pub fn snapshot(&self) -> Option<Arc<InventorySet>> {
        let state = match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match &*state {
            LoadState::Loading => None,
            LoadState::Ready(set) => Some(set.clone()),
        }
    }

    /// 是否已就绪
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_some()
    }

    /// 就绪后的记录数;未就绪返回 None
    pub fn record_count(&self) -> Option<usize> {
        self.snapshot().map(|set| set.len())
    }
}
