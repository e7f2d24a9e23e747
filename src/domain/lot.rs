// ==========================================
// 保质期库存监控系统 - 批次实体定义
// ==========================================
// 职责: 数据集行实体 + 装载后只读库存集
// 约定: 对外 JSON 字段名与源数据集列名保持一致,
//       驾驶舱与扫码端无需做字段转换
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::FreshnessStatus;

// ==========================================
// 原始批次记录 (映射后、分级前)
// ==========================================

/// 字段映射完成但尚未计算新鲜度状态的一行数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLotRecord {
    /// 商品标识（非唯一，同一商品可跨多行）
    pub product_id: String,
    /// 商品展示名称
    pub product_name: String,
    /// 批次号（扫码查询主键,非唯一,区分大小写）
    pub lot_number: String,
    /// 保质期截止日期（日粒度）
    pub expiry_date: NaiveDate,
    /// 数量（非法/缺失已降级为 0）
    pub quantity: u32,
    /// 源文件行号（从 1 开始,用于日志定位）
    pub row_number: usize,
}

// ==========================================
// 批次记录 (含派生状态)
// ==========================================

/// 库存批次记录
///
/// status 在装载时刻计算一次,之后不再随时间重算——
/// 这是有意保留的设计属性,"实时"状态需要进程重启后重新装载。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotRecord {
    #[serde(rename = "Product_ID")]
    pub product_id: String,

    #[serde(rename = "Product_Name")]
    pub product_name: String,

    #[serde(rename = "LOT_Number")]
    pub lot_number: String,

    #[serde(rename = "Expiry_Date")]
    pub expiry_date: NaiveDate,

    #[serde(rename = "Quantity")]
    pub quantity: u32,

    /// 派生字段: 装载时刻计算的新鲜度状态
    pub status: FreshnessStatus,
}

impl LotRecord {
    /// 由原始记录与已判定状态组装批次记录
    pub fn from_raw(raw: RawLotRecord, status: FreshnessStatus) -> Self {
        Self {
            product_id: raw.product_id,
            product_name: raw.product_name,
            lot_number: raw.lot_number,
            expiry_date: raw.expiry_date,
            quantity: raw.quantity,
            status,
        }
    }
}

// ==========================================
// 库存集 (InventorySet)
// ==========================================

/// 装载完成后的只读库存集合
///
/// 保持源文件行序;发布后不增删、不重排。
/// 装载窗口内由 Loader 独占填充,发布后以 Arc 共享给所有读者。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct InventorySet {
    records: Vec<LotRecord>,
}

impl InventorySet {
    /// 创建空库存集（仅供 Loader 在装载窗口内使用）
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录,保持到达顺序
    pub fn push(&mut self, record: LotRecord) {
        self.records.push(record);
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 按存储顺序访问全部记录
    pub fn records(&self) -> &[LotRecord] {
        &self.records
    }

    /// 按存储顺序迭代
    pub fn iter(&self) -> std::slice::Iter<'_, LotRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(lot: &str, qty: u32) -> LotRecord {
        LotRecord {
            product_id: "P001".to_string(),
            product_name: "牛奶 1L".to_string(),
            lot_number: lot.to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            quantity: qty,
            status: FreshnessStatus::Ok,
        }
    }

    #[test]
    fn test_inventory_set_preserves_order() {
        let mut set = InventorySet::new();
        set.push(sample_record("L1", 10));
        set.push(sample_record("L2", 5));
        set.push(sample_record("L1", 3));

        assert_eq!(set.len(), 3);
        let lots: Vec<&str> = set.iter().map(|r| r.lot_number.as_str()).collect();
        assert_eq!(lots, vec!["L1", "L2", "L1"]);
    }

    #[test]
    fn test_lot_record_wire_field_names() {
        let record = sample_record("L1", 10);
        let json = serde_json::to_value(&record).unwrap();

        // 对外字段名必须与源数据集列名一致
        assert_eq!(json["Product_ID"], "P001");
        assert_eq!(json["LOT_Number"], "L1");
        assert_eq!(json["Expiry_Date"], "2026-09-10");
        assert_eq!(json["Quantity"], 10);
        assert_eq!(json["status"], "ok");
    }

    #[test]
    fn test_inventory_set_serializes_as_array() {
        let mut set = InventorySet::new();
        set.push(sample_record("L1", 10));

        let json = serde_json::to_value(&set).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
