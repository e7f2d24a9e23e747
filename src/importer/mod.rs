// ==========================================
// 保质期库存监控系统 - 导入层
// ==========================================
// 职责: 外部表格数据装载,生成内部库存集
// 支持: CSV, Excel
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod inventory_loader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use inventory_loader::{InventoryLoader, LoadReport};
