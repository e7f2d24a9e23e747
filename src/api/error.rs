// ==========================================
// 保质期库存监控系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎层错误为边界信号
// 约定: 未就绪 ↔ 服务不可用(503等价),
//       未找到 ↔ 资源不存在(404等价),由外部传输层完成映射
// ==========================================

use thiserror::Error;

use crate::engine::query::QueryError;
use crate::importer::error::ImportError;

/// API层错误类型
///
/// 所有错误在边界处落地为类型化结局,绝不越过边界抛出。
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 就绪性错误
    // ==========================================
    /// 数据集装载中或装载已失败;调用方可稍后重试
    #[error("数据集装载中, 请稍后重试")]
    NotReady,

    // ==========================================
    // 业务结局错误
    // ==========================================
    /// 批次号合法但零命中（正常预期结局,不是故障）
    #[error("批次未找到: {0}")]
    LotNotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("数据集装载失败: {0}")]
    ImportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 QueryError 转换
// ==========================================
impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotReady => ApiError::NotReady,
            QueryError::LotNotFound(lot) => ApiError::LotNotFound(lot),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_conversion() {
        let api_err: ApiError = QueryError::NotReady.into();
        assert!(matches!(api_err, ApiError::NotReady));

        let api_err: ApiError = QueryError::LotNotFound("L9".to_string()).into();
        match api_err {
            ApiError::LotNotFound(lot) => assert_eq!(lot, "L9"),
            other => panic!("expected LotNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_import_error_conversion_keeps_reason() {
        let api_err: ApiError = ImportError::FileNotFound("a.csv".to_string()).into();
        match api_err {
            ApiError::ImportError(msg) => assert!(msg.contains("a.csv")),
            other => panic!("expected ImportError, got {:?}", other),
        }
    }
}
