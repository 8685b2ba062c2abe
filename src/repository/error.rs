// ==========================================
// 库存导入导出引擎 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 由外部存储实现返回，导入服务将其转换为 ImportError
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("存储连接失败: {0}")]
    ConnectionError(String),

    #[error("查询失败: {0}")]
    QueryError(String),

    #[error("写入失败: {0}")]
    WriteError(String),

    // 存储实现自带的错误（anyhow 包装，保留上下文链）
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
