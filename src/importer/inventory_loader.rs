// ==========================================
// 保质期库存监控系统 - 库存装载器
// ==========================================
// 职责: 单遍折叠 解析 → 映射 → 判定 → 追加,
//       流结束时恰好一次翻转就绪标志
// 约束: 每进程只运行一次,不可重启;装载窗口内独占库存集,
//       无并发控制需求(读者在就绪前一律被拒)
// ==========================================

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use crate::domain::lot::InventorySet;
use crate::engine::freshness::FreshnessEngine;
use crate::engine::store::InventoryStore;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;

// ==========================================
// 装载报告
// ==========================================

/// 一次装载的统计结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// 源文件数据行总数（不含表头、不含空行）
    pub total_rows: usize,
    /// 成功进入库存集的记录数
    pub loaded: usize,
    /// 因保质期日期无法解析而丢弃的行数
    pub skipped: usize,
}

// ==========================================
// InventoryLoader - 库存装载器
// ==========================================
pub struct InventoryLoader {
    parser: UniversalFileParser,
    mapper: FieldMapper,
    freshness: FreshnessEngine,
    store: Arc<InventoryStore>,
}

impl InventoryLoader {
    /// 创建装载器,与查询引擎共享同一存储
    pub fn new(store: Arc<InventoryStore>, warning_window_days: i64) -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: FieldMapper,
            freshness: FreshnessEngine::new(warning_window_days),
            store,
        }
    }

    /// 装载数据集
    ///
    /// 逐行处理:每行在被处理的时刻各自捕获一次 now,
    /// 新鲜度状态由此冻结,后续查询不再重算。
    ///
    /// 流级错误(文件不可读、格式非法)直接返回 Err,
    /// 就绪标志保持未就绪;单行日期缺陷仅丢弃该行并告警。
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<LoadReport> {
        let rows = self.parser.parse(path.as_ref())?;
        let total_rows = rows.len();

        let mut set = InventorySet::new();
        let mut skipped = 0usize;

        for (idx, row) in rows.iter().enumerate() {
            // 数据行号从 1 起,用于缺陷定位
            match self.mapper.map_to_raw_lot(row, idx + 1) {
                Ok(raw) => {
                    let now = Utc::now().naive_utc();
                    set.push(self.freshness.classify_record(raw, now));
                }
                Err(defect) => {
                    skipped += 1;
                    tracing::warn!("丢弃无法判定新鲜度的行: {}", defect);
                }
            }
        }

        let loaded = set.len();
        self.store.publish(Arc::new(set));

        tracing::info!(
            "数据集装载完成: 总行数={}, 入库={}, 丢弃={}",
            total_rows,
            loaded,
            skipped
        );

        Ok(LoadReport {
            total_rows,
            loaded,
            skipped,
        })
    }

    /// 装载并就地消化错误（进程入口使用）
    ///
    /// 失败只记录日志,进程保持存活——所有查询将一直收到
    /// "未就绪",只能通过日志区分"装载中"与"永不就绪",
    /// 由运维重启进程恢复。
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Option<LoadReport> {
        match self.load(path) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!("数据集装载失败, 本进程将持续处于未就绪状态: {}", e);
                None
            }
        }
    }
}
