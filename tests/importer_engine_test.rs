// ==========================================
// InventoryLoader 集成测试
// ==========================================
// 测试目标: 验证完整的数据集装载流程
// ==========================================

use std::io::Write;
use std::sync::Arc;

use chrono::{Duration, Utc};
use expiry_inventory::engine::freshness::DEFAULT_WARNING_WINDOW_DAYS;
use expiry_inventory::logging;
use expiry_inventory::{FreshnessStatus, InventoryLoader, InventoryQueryEngine, InventoryStore};
use tempfile::NamedTempFile;

/// 创建测试 CSV 文件
fn write_dataset(lines: &[String]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp csv");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write temp csv");
    }
    file
}

/// 创建共享存储 + 装载器
fn create_test_loader() -> (InventoryLoader, Arc<InventoryStore>) {
    let store = Arc::new(InventoryStore::new());
    let loader = InventoryLoader::new(store.clone(), DEFAULT_WARNING_WINDOW_DAYS);
    (loader, store)
}

#[test]
fn test_load_csv_basic() {
    logging::init_test();

    let today = Utc::now().date_naive();
    let dataset = write_dataset(&[
        "Product_ID,Product_Name,LOT_Number,Expiry_Date,Quantity".to_string(),
        format!("P001,牛奶 1L,L1,{},10", today + Duration::days(2)),
        format!("P001,牛奶 1L,L1,{},5", today + Duration::days(2)),
        format!("P002,酸奶 500g,L2,{},7", today - Duration::days(1)),
        format!("P003,冻虾 1kg,L3,{},12", today + Duration::days(40)),
    ]);

    let (loader, store) = create_test_loader();
    let report = loader.load(dataset.path()).expect("load should succeed");

    // 验证装载统计
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.loaded, 4);
    assert_eq!(report.skipped, 0);

    // 装载完成后就绪标志翻转,记录数与源文件一致
    assert!(store.is_ready());
    assert_eq!(store.record_count(), Some(4));

    // 行序保持文件顺序,状态在装载时刻冻结
    let set = store.snapshot().expect("store should be ready");
    let lots: Vec<&str> = set.iter().map(|r| r.lot_number.as_str()).collect();
    assert_eq!(lots, vec!["L1", "L1", "L2", "L3"]);

    let statuses: Vec<FreshnessStatus> = set.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            FreshnessStatus::Warning,
            FreshnessStatus::Warning,
            FreshnessStatus::Expired,
            FreshnessStatus::Ok,
        ]
    );
}

#[test]
fn test_queries_rejected_until_load_completes() {
    logging::init_test();

    let today = Utc::now().date_naive();
    let dataset = write_dataset(&[
        "Product_ID,Product_Name,LOT_Number,Expiry_Date,Quantity".to_string(),
        format!("P001,牛奶 1L,L1,{},10", today + Duration::days(2)),
    ]);

    let (loader, store) = create_test_loader();
    let engine = InventoryQueryEngine::new(store.clone());

    // 装载前: 全量扫描与点查都收到"未就绪"
    assert!(engine.full_scan().is_err());
    assert!(engine.find_by_lot("L1").is_err());

    loader.load(dataset.path()).expect("load should succeed");

    // 装载后: 两个操作都可用
    assert_eq!(engine.full_scan().unwrap().len(), 1);
    assert_eq!(engine.find_by_lot("L1").unwrap().len(), 1);
}

#[test]
fn test_full_scan_idempotent_after_load() {
    logging::init_test();

    let today = Utc::now().date_naive();
    let dataset = write_dataset(&[
        "Product_ID,Product_Name,LOT_Number,Expiry_Date,Quantity".to_string(),
        format!("P001,牛奶 1L,L1,{},10", today + Duration::days(1)),
        format!("P002,酸奶 500g,L2,{},7", today + Duration::days(9)),
    ]);

    let (loader, store) = create_test_loader();
    loader.load(dataset.path()).expect("load should succeed");

    let engine = InventoryQueryEngine::new(store);
    let first = engine.full_scan().unwrap();
    let second = engine.full_scan().unwrap();

    // 两次扫描之间无装载事件: 顺序与状态逐条一致
    assert_eq!(first.records(), second.records());
}

#[test]
fn test_defective_rows_degrade_not_abort() {
    logging::init_test();

    let today = Utc::now().date_naive();
    let dataset = write_dataset(&[
        "Product_ID,Product_Name,LOT_Number,Expiry_Date,Quantity".to_string(),
        // 数量非法 → 归零,不丢弃
        format!("P001,牛奶 1L,L1,{},abc", today + Duration::days(2)),
        // 日期非法 → 丢弃该行,不中断装载
        "P002,酸奶 500g,L2,garbage,7".to_string(),
        format!("P003,冻虾 1kg,L3,{},4", today + Duration::days(20)),
    ]);

    let (loader, store) = create_test_loader();
    let report = loader.load(dataset.path()).expect("load should succeed");

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 1);

    let set = store.snapshot().unwrap();
    assert_eq!(set.records()[0].lot_number, "L1");
    assert_eq!(set.records()[0].quantity, 0);
    assert_eq!(set.records()[1].lot_number, "L3");
}

#[test]
fn test_stream_failure_keeps_store_not_ready_forever() {
    logging::init_test();

    let (loader, store) = create_test_loader();

    // 源不可读属于流级致命错误: 记录日志,就绪标志永不翻转
    assert!(loader.run("definitely_missing_dataset.csv").is_none());
    assert!(!store.is_ready());

    let engine = InventoryQueryEngine::new(store);
    assert!(engine.full_scan().is_err());
}
