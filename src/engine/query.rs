// ==========================================
// 保质期库存监控系统 - 库存查询引擎
// ==========================================
// 职责: 全量扫描 + 按批次号点查
// 红线: 两个操作都是纯读,不变更库存集
// ==========================================

use std::sync::Arc;

use thiserror::Error;

use crate::domain::lot::{InventorySet, LotRecord};
use crate::engine::store::InventoryStore;

// ==========================================
// 查询错误类型
// ==========================================

/// 查询引擎的类型化结果
///
/// "未就绪"与"未找到"是两类不同的正常结局,
/// 由边界层分别映射为 503 / 404 等价信号,不在此处升级为崩溃。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// 数据集尚未装载完成(或装载已失败),调用方可稍后重试
    #[error("数据集装载中, 请稍后重试")]
    NotReady,

    /// 批次号合法但零命中
    #[error("批次未找到: {0}")]
    LotNotFound(String),
}

/// Result 类型别名
pub type QueryResult<T> = Result<T, QueryError>;

// ==========================================
// InventoryQueryEngine - 库存查询引擎
// ==========================================
pub struct InventoryQueryEngine {
    store: Arc<InventoryStore>,
}

impl InventoryQueryEngine {
    /// 创建查询引擎,与 Loader 共享同一存储
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    /// 全量扫描
    ///
    /// 按存储顺序返回整个库存集;无过滤、无分页。
    /// 返回共享快照,重复调用结果逐条一致(幂等)。
    pub fn full_scan(&self) -> QueryResult<Arc<InventorySet>> {
        self.store.snapshot().ok_or(QueryError::NotReady)
    }

    /// 按批次号点查
    ///
    /// 精确匹配(区分大小写,不做任何归一化),返回所有命中记录——
    /// 一个批次是多行构成的单元,不是单条记录。
    /// 零命中返回 LotNotFound,与空结果成功语义严格区分。
    pub fn find_by_lot(&self, lot_number: &str) -> QueryResult<Vec<LotRecord>> {
        let set = self.store.snapshot().ok_or(QueryError::NotReady)?;

        let matches: Vec<LotRecord> = set
            .iter()
            .filter(|record| record.lot_number == lot_number)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(QueryError::LotNotFound(lot_number.to_string()));
        }

        Ok(matches)
    }
}
