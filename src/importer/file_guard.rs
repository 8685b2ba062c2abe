// ==========================================
// 库存导入导出引擎 - 文件守卫
// ==========================================
// 职责: 解码前拒绝超大文件与不支持的文件类型
// ==========================================

use crate::config::ImportConfig;
use crate::importer::error::{ImportError, ImportOutcome};
use std::path::Path;
use tracing::warn;

pub struct FileGuard {
    max_file_bytes: u64,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl FileGuard {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            max_file_bytes: config.max_file_bytes,
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            allowed_content_types: config
                .allowed_content_types
                .iter()
                .map(|c| c.to_lowercase())
                .collect(),
        }
    }

    /// 校验文件
    ///
    /// # 参数
    /// - file_name: 文件名（取扩展名）
    /// - size_bytes: 文件大小
    /// - content_type: MIME 类型（可选，缺省时仅校验扩展名）
    ///
    /// # 返回
    /// - Ok(String): 小写扩展名
    /// - Err: FileTooLarge / UnsupportedFormat
    pub fn check(
        &self,
        file_name: &str,
        size_bytes: u64,
        content_type: Option<&str>,
    ) -> ImportOutcome<String> {
        let extension = extension_of(file_name);
        if !self.allowed_extensions.contains(&extension) {
            warn!(file_name = %file_name, "文件类型不支持");
            return Err(ImportError::UnsupportedFormat(if extension.is_empty() {
                file_name.to_string()
            } else {
                extension
            }));
        }

        if let Some(ct) = content_type {
            // 去掉 "; charset=..." 等参数
            let mime = ct.split(';').next().unwrap_or("").trim().to_lowercase();
            if !self.allowed_content_types.contains(&mime) {
                warn!(file_name = %file_name, content_type = %ct, "content-type 不支持");
                return Err(ImportError::UnsupportedFormat(ct.to_string()));
            }
        }

        if size_bytes > self.max_file_bytes {
            warn!(file_name = %file_name, size_bytes, limit = self.max_file_bytes, "文件超出大小上限");
            return Err(ImportError::FileTooLarge {
                size: size_bytes,
                limit: self.max_file_bytes,
            });
        }

        Ok(extension)
    }
}

impl FileGuard {
    /// 校验磁盘文件：只读元数据取大小，不读取内容
    ///
    /// # 返回
    /// - Ok(String): 小写扩展名
    /// - Err: FileNotFound / FileTooLarge / UnsupportedFormat
    pub fn check_path(&self, path: &Path) -> ImportOutcome<String> {
        let size_bytes = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.check(file_name, size_bytes, None)
    }
}

/// 小写扩展名（无扩展名返回空串）
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> FileGuard {
        FileGuard::new(&ImportConfig::default())
    }

    #[test]
    fn test_accepts_allowed_types() {
        let guard = guard();
        assert_eq!(guard.check("stock.CSV", 10, None).unwrap(), "csv");
        assert_eq!(
            guard
                .check("stock.xlsx", 10, Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"))
                .unwrap(),
            "xlsx"
        );
        assert!(guard.check("stock.csv", 10, Some("text/csv; charset=utf-8")).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let err = guard().check("stock.pdf", 10, None).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(ext) if ext == "pdf"));

        let err = guard().check("stock", 10, None).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_unsupported_content_type() {
        let err = guard().check("stock.csv", 10, Some("image/png")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_oversized_file() {
        let limit = ImportConfig::default().max_file_bytes;
        assert!(guard().check("stock.csv", limit, None).is_ok());

        let err = guard().check("stock.csv", limit + 1, None).unwrap_err();
        assert!(matches!(err, ImportError::FileTooLarge { size, .. } if size == limit + 1));
        assert!(err.is_file_rejection());
    }

    #[test]
    fn test_check_path_uses_metadata_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stock.csv");
        std::fs::write(&path, "Name,Quantity\nPens,5\n").unwrap();
        let config = ImportConfig {
            max_file_bytes: 8,
            ..ImportConfig::default()
        };

        let err = FileGuard::new(&config).check_path(&path).unwrap_err();

        assert!(matches!(err, ImportError::FileTooLarge { size: 21, limit: 8 }));
        assert_eq!(guard().check_path(&path).unwrap(), "csv");
    }

    #[test]
    fn test_check_path_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();

        let err = guard().check_path(&dir.path().join("absent.csv")).unwrap_err();

        assert!(matches!(err, ImportError::FileNotFound(_)));
    }
}
