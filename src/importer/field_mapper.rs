// ==========================================
// 保质期库存监控系统 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 标准字段映射 + 类型转换
// 降级策略: 数量解析失败归零;日期解析失败上报错误,
//           由 Loader 决定丢弃该行(不中断整体装载)
// ==========================================

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::lot::RawLotRecord;
use crate::importer::error::{ImportError, ImportResult};

pub struct FieldMapper;

impl FieldMapper {
    /// 将一行 {列名 → 值} 映射为原始批次记录
    ///
    /// - 文本字段缺失降级为空字符串(一行仍是可计数的批次单元)
    /// - 数量非法/缺失降级为 0,绝不作为致命错误
    /// - 日期解析失败返回 DateFormatError,该行由调用方丢弃
    pub fn map_to_raw_lot(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawLotRecord> {
        Ok(RawLotRecord {
            product_id: self.get_string(row, "Product_ID"),
            product_name: self.get_string(row, "Product_Name"),
            lot_number: self.get_string(row, "LOT_Number"),
            expiry_date: self.parse_date(row, "Expiry_Date", row_number)?,
            quantity: self.parse_quantity(row, "Quantity"),
            row_number,
        })
    }

    /// 提取字符串字段,缺失降级为空字符串
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// 解析数量（非负整数）
    ///
    /// 非法值(如 "abc")与缺失值统一归零,只用于聚合口径,
    /// 不产生错误——与驾驶舱端 NaN 安全聚合保持同一语义。
    fn parse_quantity(&self, row: &HashMap<String, String>, key: &str) -> u32 {
        self.get_string(row, key).parse::<u32>().unwrap_or(0)
    }

    /// 解析日期（YYYY-MM-DD,兼容 YYYYMMDD）
    fn parse_date(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<NaiveDate> {
        let value = self.get_string(row, key);

        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&value, "%Y%m%d"))
            .map_err(|_| ImportError::DateFormatError {
                row: row_number,
                field: key.to_string(),
                value,
            })
    }
}
