// ==========================================
// 保质期库存监控系统 - 主入口
// ==========================================
// 职责: 运维入口——装载数据集并输出库存健康汇总
// 说明: HTTP/页面等传输与展示由外部协作方承担,
//       本进程只负责装载、分级与查询面
// ==========================================

use std::process::ExitCode;

use expiry_inventory::app::{get_default_dataset_path, AppState};
use expiry_inventory::config::ConfigManager;
use expiry_inventory::logging;

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", expiry_inventory::APP_NAME);
    tracing::info!("系统版本: {}", expiry_inventory::VERSION);
    tracing::info!("==================================================");

    // 加载配置（可选首个参数为 JSON 配置文件路径）
    let config_file = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = ConfigManager::load(config_file.as_deref());

    // 解析数据集路径
    let dataset_path = get_default_dataset_path(&config);
    tracing::info!("使用数据集: {}", dataset_path.display());

    // 装配并执行一次性装载
    let state = AppState::new(&config);
    let Some(report) = state.load_dataset(&dataset_path) else {
        // 装载失败已在日志中说明原因;查询面将永远返回"未就绪"
        return ExitCode::FAILURE;
    };

    tracing::info!(
        "装载报告: 总行数={}, 入库={}, 丢弃={}",
        report.total_rows,
        report.loaded,
        report.skipped
    );

    // 输出库存健康汇总
    match state.inventory_api.get_status_summary() {
        Ok(summary) => {
            tracing::info!(
                "库存汇总: 记录={}, 总量={}, 过期={}, 临期={}, 正常={}",
                summary.record_count,
                summary.total_units,
                summary.expired_units,
                summary.warning_units,
                summary.ok_units
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("库存汇总查询失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
