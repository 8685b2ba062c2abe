// ==========================================
// 库存导入导出引擎 - 导入配置
// ==========================================
// 来源优先级: 环境变量 > JSON 配置文件 > 默认值
// ==========================================

use crate::importer::error::{ImportError, ImportOutcome};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 配置键（环境变量名）
pub mod config_keys {
    pub const MAX_FILE_BYTES: &str = "INVENTORY_IMPORT_MAX_FILE_BYTES";
    pub const ERROR_DISPLAY_LIMIT: &str = "INVENTORY_IMPORT_ERROR_DISPLAY_LIMIT";
    pub const INSERT_BATCH_SIZE: &str = "INVENTORY_IMPORT_BATCH_SIZE";
    pub const CONFIG_FILE: &str = "INVENTORY_IMPORT_CONFIG";
    pub const LOG_FORMAT: &str = "INVENTORY_IMPORT_LOG_FORMAT";
}

// ==========================================
// ImportConfig - 导入/导出配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// 文件大小上限（字节）
    pub max_file_bytes: u64,
    /// 允许的扩展名（小写，不含 '.'）
    pub allowed_extensions: Vec<String>,
    /// 允许的 content-type
    pub allowed_content_types: Vec<String>,
    /// 结果摘要中最多展示的错误条数
    pub error_display_limit: usize,
    /// 表示"无分类"的哨兵值（大小写不敏感）
    pub no_category_sentinels: Vec<String>,
    /// status 缺省值
    pub default_status: String,
    /// 导出时无分类物品的分类显示名
    pub default_category_label: String,
    /// 导出 last_updated 的日期格式（chrono strftime）
    pub export_date_format: String,
    /// 有效行写入存储的分批大小
    pub insert_batch_size: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            allowed_extensions: vec!["xlsx".to_string(), "xls".to_string(), "csv".to_string()],
            allowed_content_types: vec![
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
                "application/vnd.ms-excel".to_string(),
                "text/csv".to_string(),
                "application/csv".to_string(),
            ],
            error_display_limit: 10,
            no_category_sentinels: vec![
                "none".to_string(),
                "__none__".to_string(),
                "no category".to_string(),
            ],
            default_status: "active".to_string(),
            default_category_label: "General".to_string(),
            export_date_format: "%-m/%-d/%Y".to_string(),
            insert_batch_size: 500,
        }
    }
}

impl ImportConfig {
    /// 从 JSON 字符串加载（缺省字段取默认值）
    pub fn from_json_str(json: &str) -> ImportOutcome<Self> {
        let config: ImportConfig =
            serde_json::from_str(json).map_err(|e| ImportError::ConfigError {
                key: "<json>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    ///
    /// # 返回
    /// - Err(ImportError::Other): 文件不可读（错误信息附带配置文件路径）
    /// - Err(ImportError::ConfigError): 内容非法
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportOutcome<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// 应用环境变量覆写
    pub fn with_env_overrides(self) -> ImportOutcome<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// 应用覆写（lookup 返回 None 表示不覆写）
    pub fn with_overrides<F>(mut self, lookup: F) -> ImportOutcome<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(config_keys::MAX_FILE_BYTES) {
            self.max_file_bytes = parse_override(config_keys::MAX_FILE_BYTES, &v)?;
        }
        if let Some(v) = lookup(config_keys::ERROR_DISPLAY_LIMIT) {
            self.error_display_limit = parse_override(config_keys::ERROR_DISPLAY_LIMIT, &v)?;
        }
        if let Some(v) = lookup(config_keys::INSERT_BATCH_SIZE) {
            self.insert_batch_size = parse_override(config_keys::INSERT_BATCH_SIZE, &v)?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ImportOutcome<()> {
        if self.max_file_bytes == 0 {
            return Err(ImportError::ConfigError {
                key: "max_file_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.insert_batch_size == 0 {
            return Err(ImportError::ConfigError {
                key: "insert_batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> ImportOutcome<T> {
    value.trim().parse::<T>().map_err(|_| ImportError::ConfigError {
        key: key.to_string(),
        message: format!("invalid value: {}", value),
    })
}
