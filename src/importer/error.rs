// ==========================================
// 库存导入导出引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 仅表示整文件级致命错误；行级错误以字符串记录在 InvalidItem 中
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件结构错误（整文件拒绝）=====
    #[error("File contains no data rows")]
    EmptyFile,

    #[error("Unrecognized header format: no name column found (headers: {})", .headers.join(", "))]
    MissingNameColumn { headers: Vec<String> },

    // ===== 文件守卫错误 =====
    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Unsupported file type: {0} (allowed: .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== 外部协作方错误 =====
    #[error("Category catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Persistence failed: {0}")]
    PersistenceError(String),

    // ===== 配置错误 =====
    #[error("Invalid configuration (key: {key}): {message}")]
    ConfigError { key: String, message: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 整文件级错误：在读取任何数据行之前即终止
    pub fn is_file_rejection(&self) -> bool {
        matches!(
            self,
            ImportError::EmptyFile
                | ImportError::MissingNameColumn { .. }
                | ImportError::FileTooLarge { .. }
                | ImportError::UnsupportedFormat(_)
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<RepositoryError>
impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        ImportError::PersistenceError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportOutcome<T> = Result<T, ImportError>;
