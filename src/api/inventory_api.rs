// ==========================================
// 保质期库存监控系统 - 库存查询 API
// ==========================================
// 职责: 封装查询引擎,提供驾驶舱/扫码端的业务接口
// 消费方: 监控驾驶舱(全量+聚合) / 扫码打包工作台(批次点查)
// ==========================================

use std::sync::Arc;

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::lot::{InventorySet, LotRecord};
use crate::domain::types::FreshnessStatus;
use crate::engine::query::InventoryQueryEngine;
use crate::engine::store::InventoryStore;

// ==========================================
// 状态汇总 DTO
// ==========================================

/// 驾驶舱状态汇总（按数量聚合）
///
/// 数量缺陷在装载时已归零,此处聚合天然 NaN 安全。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// 记录总数
    pub record_count: usize,
    /// 全部数量合计
    pub total_units: u64,
    /// 已过期数量合计
    pub expired_units: u64,
    /// 临期数量合计
    pub warning_units: u64,
    /// 正常数量合计
    pub ok_units: u64,
}

// ==========================================
// InventoryApi - 库存查询 API
// ==========================================
pub struct InventoryApi {
    query_engine: InventoryQueryEngine,
}

impl InventoryApi {
    /// 创建新的InventoryApi实例,与 Loader 共享同一存储
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self {
            query_engine: InventoryQueryEngine::new(store),
        }
    }

    // ==========================================
    // 核心查询接口
    // ==========================================

    /// 全量库存查询（驾驶舱）
    ///
    /// 按存储顺序返回整个库存集;未就绪时返回 ApiError::NotReady。
    pub fn list_inventory(&self) -> ApiResult<Arc<InventorySet>> {
        Ok(self.query_engine.full_scan()?)
    }

    /// 批次点查（扫码打包工作台）
    ///
    /// 返回批次号精确命中的全部记录;
    /// 零命中 → LotNotFound,未就绪 → NotReady,两者严格区分。
    pub fn get_lot(&self, lot_number: &str) -> ApiResult<Vec<LotRecord>> {
        let key = lot_number.trim();
        if key.is_empty() {
            return Err(ApiError::InvalidInput("批次号不能为空".to_string()));
        }

        // 点查本身不做任何归一化,trim 只用于拦截空白输入
        Ok(self.query_engine.find_by_lot(lot_number)?)
    }

    // ==========================================
    // 驾驶舱聚合接口
    // ==========================================

    /// 按状态聚合数量汇总
    pub fn get_status_summary(&self) -> ApiResult<StatusSummary> {
        let set = self.query_engine.full_scan()?;

        let mut summary = StatusSummary {
            record_count: set.len(),
            total_units: 0,
            expired_units: 0,
            warning_units: 0,
            ok_units: 0,
        };

        for record in set.iter() {
            let units = u64::from(record.quantity);
            summary.total_units += units;
            match record.status {
                FreshnessStatus::Expired => summary.expired_units += units,
                FreshnessStatus::Warning => summary.warning_units += units,
                FreshnessStatus::Ok => summary.ok_units += units,
            }
        }

        Ok(summary)
    }

    /// 临期/过期批次列表,按截止日期升序（驾驶舱"重点批次"面板）
    ///
    /// limit = 0 表示不限条数。
    pub fn list_expiring_soon(&self, limit: usize) -> ApiResult<Vec<LotRecord>> {
        let set = self.query_engine.full_scan()?;

        let mut critical: Vec<LotRecord> = set
            .iter()
            .filter(|r| r.status != FreshnessStatus::Ok)
            .cloned()
            .collect();
        critical.sort_by_key(|r| r.expiry_date);

        if limit > 0 {
            critical.truncate(limit);
        }

        Ok(critical)
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(lot: &str, day: u32, qty: u32, status: FreshnessStatus) -> LotRecord {
        LotRecord {
            product_id: format!("P-{}", lot),
            product_name: "测试商品".to_string(),
            lot_number: lot.to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, day).unwrap(),
            quantity: qty,
            status,
        }
    }

    fn ready_api() -> InventoryApi {
        let store = Arc::new(InventoryStore::new());
        let mut set = InventorySet::new();
        set.push(record("L1", 3, 10, FreshnessStatus::Warning));
        set.push(record("L2", 1, 7, FreshnessStatus::Expired));
        set.push(record("L1", 3, 5, FreshnessStatus::Warning));
        set.push(record("L4", 20, 8, FreshnessStatus::Ok));
        store.publish(Arc::new(set));
        InventoryApi::new(store)
    }

    #[test]
    fn test_list_inventory_not_ready() {
        let api = InventoryApi::new(Arc::new(InventoryStore::new()));
        assert!(matches!(api.list_inventory(), Err(ApiError::NotReady)));
        assert!(matches!(api.get_lot("L1"), Err(ApiError::NotReady)));
        assert!(matches!(api.get_status_summary(), Err(ApiError::NotReady)));
    }

    #[test]
    fn test_get_lot_blank_key_is_invalid_input() {
        let api = ready_api();
        assert!(matches!(api.get_lot("  "), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_get_lot_returns_whole_batch() {
        let api = ready_api();
        let hits = api.get_lot("L1").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.iter().map(|r| u64::from(r.quantity)).sum::<u64>(), 15);
    }

    #[test]
    fn test_get_lot_absent_is_not_found() {
        let api = ready_api();
        assert!(matches!(api.get_lot("L9"), Err(ApiError::LotNotFound(_))));
    }

    #[test]
    fn test_status_summary_aggregates_by_units() {
        let api = ready_api();
        let summary = api.get_status_summary().unwrap();

        assert_eq!(
            summary,
            StatusSummary {
                record_count: 4,
                total_units: 30,
                expired_units: 7,
                warning_units: 15,
                ok_units: 8,
            }
        );
    }

    #[test]
    fn test_expiring_soon_sorted_and_filtered() {
        let api = ready_api();
        let critical = api.list_expiring_soon(0).unwrap();

        // ok 记录被排除,其余按截止日期升序
        assert_eq!(critical.len(), 3);
        assert_eq!(critical[0].lot_number, "L2");
        assert!(critical.iter().all(|r| r.status != FreshnessStatus::Ok));

        let limited = api.list_expiring_soon(1).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].lot_number, "L2");
    }
}
