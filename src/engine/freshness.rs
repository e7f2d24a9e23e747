// ==========================================
// 保质期库存监控系统 - 新鲜度判定引擎
// ==========================================
// 红线: 新鲜度是"等级制",不是评分制
// ==========================================
// 职责: 按保质期截止日期与参考时刻判定三级状态
// 输入: expiry_date + 装载时刻 now
// 输出: FreshnessStatus (expired / warning / ok)
// ==========================================

use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::lot::{LotRecord, RawLotRecord};
use crate::domain::types::FreshnessStatus;

/// 一天的毫秒数（天数差按毫秒差对 24 小时向上取整）
const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 默认临期窗口（天）: diff_days ∈ [0, 5] 判为 warning
pub const DEFAULT_WARNING_WINDOW_DAYS: i64 = 5;

// ==========================================
// FreshnessEngine - 新鲜度判定引擎
// ==========================================
pub struct FreshnessEngine {
    /// 临期窗口（天）,边界含端点
    warning_window_days: i64,
}

impl Default for FreshnessEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WARNING_WINDOW_DAYS)
    }
}

impl FreshnessEngine {
    /// 创建新的判定引擎
    pub fn new(warning_window_days: i64) -> Self {
        Self {
            warning_window_days,
        }
    }

    /// 计算距离过期的天数差
    ///
    /// 规则: 截止日按当日 00:00:00 取时刻,与 now 求毫秒差后
    /// 对 24 小时向上取整。必须是 ceiling 而非 floor 或日历截断:
    /// - 过期数小时（|差值| < 24h）→ 0 天,仍在 warning 边界内
    /// - 恰好过期 24 小时 → -1 天,判为 expired
    pub fn diff_days(&self, expiry: chrono::NaiveDate, now: NaiveDateTime) -> i64 {
        let expiry_instant = expiry.and_time(NaiveTime::MIN);
        let diff_ms = (expiry_instant - now).num_milliseconds();

        // 欧几里得除法实现对负数同样正确的向上取整
        let quotient = diff_ms.div_euclid(MS_PER_DAY);
        let remainder = diff_ms.rem_euclid(MS_PER_DAY);
        quotient + (remainder != 0) as i64
    }

    /// 判定单条记录的新鲜度状态
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) diff_days < 0            → expired
    /// 2) diff_days <= 窗口（含端点）→ warning (当天过期也是 warning)
    /// 3) 其他                      → ok
    pub fn classify(&self, expiry: chrono::NaiveDate, now: NaiveDateTime) -> FreshnessStatus {
        let diff_days = self.diff_days(expiry, now);

        if diff_days < 0 {
            return FreshnessStatus::Expired;
        }

        if diff_days <= self.warning_window_days {
            return FreshnessStatus::Warning;
        }

        FreshnessStatus::Ok
    }

    /// 对映射完成的原始记录附加派生状态
    ///
    /// now 由调用方在处理该行的时刻捕获,状态自此冻结。
    pub fn classify_record(&self, raw: RawLotRecord, now: NaiveDateTime) -> LotRecord {
        let status = self.classify(raw.expiry_date, now);
        LotRecord::from_raw(raw, status)
    }
}
