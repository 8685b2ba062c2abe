// ==========================================
// 库存导入导出引擎 - 导入对账器
// ==========================================
// 职责: 整表对账（归一 → 校验 → 分类解析 → 分区）
// 失败语义:
//   - 无数据行 / 表头无名称列 → 整文件致命错误
//   - 必填缺失 / 数值非法 / 分类未找到 → 行级错误，继续处理后续行
// 缺失分类: 大小写不敏感去重，保留首次出现的写法
// 红线: 纯函数，不做 I/O，不打日志
// ==========================================

use crate::config::ImportConfig;
use crate::domain::inventory::{Category, ImportResult, InvalidItem, ValidItem};
use crate::domain::row::RawRow;
use crate::importer::category_resolver::CategoryResolver as CategoryResolverImpl;
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::field_normalizer::FieldNormalizer as FieldNormalizerImpl;
use crate::importer::row_validator::RowValidator as RowValidatorImpl;
use crate::importer::traits::{CategoryResolver, FieldNormalizer, Reconciler, RowValidator};

// ==========================================
// ImportReconciler - 导入对账器
// ==========================================
pub struct ImportReconciler {
    field_normalizer: Box<dyn FieldNormalizer>,
    row_validator: Box<dyn RowValidator>,
    category_resolver: Box<dyn CategoryResolver>,
}

impl ImportReconciler {
    /// 按配置创建默认组件
    pub fn new(config: &ImportConfig) -> Self {
        Self::with_components(
            Box::new(FieldNormalizerImpl),
            Box::new(RowValidatorImpl::new(config.default_status.clone())),
            Box::new(
                CategoryResolverImpl::new(&config.no_category_sentinels)
                    .with_default_label(&config.default_category_label),
            ),
        )
    }

    /// 注入自定义组件
    pub fn with_components(
        field_normalizer: Box<dyn FieldNormalizer>,
        row_validator: Box<dyn RowValidator>,
        category_resolver: Box<dyn CategoryResolver>,
    ) -> Self {
        Self {
            field_normalizer,
            row_validator,
            category_resolver,
        }
    }

    /// 整文件格式守卫
    fn check_header(&self, rows: &[RawRow]) -> ImportOutcome<()> {
        let first = rows.first().ok_or(ImportError::EmptyFile)?;
        if self.field_normalizer.recognizes_name_column(first) {
            Ok(())
        } else {
            Err(ImportError::MissingNameColumn {
                headers: first.keys().map(str::to_string).collect(),
            })
        }
    }
}

impl Default for ImportReconciler {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}

impl Reconciler for ImportReconciler {
    fn reconcile(&self, rows: &[RawRow], catalog: &[Category]) -> ImportOutcome<ImportResult> {
        self.check_header(rows)?;

        let mut result = ImportResult::default();
        // 缺失分类去重键（小写），保留首次出现的原始写法
        let mut missing_keys: Vec<String> = Vec::new();

        for (idx, raw) in rows.iter().enumerate() {
            let row_index = idx + 1;
            let normalized = self.field_normalizer.normalize_row(raw);

            let fields = match self.row_validator.validate(&normalized, row_index) {
                Ok(fields) => fields,
                Err(error) => {
                    result.invalid_items.push(InvalidItem {
                        row_index,
                        row: normalized,
                        error,
                    });
                    continue;
                }
            };

            let resolved = self
                .category_resolver
                .resolve(fields.category.as_deref(), catalog);
            let missing = match fields.category.as_deref() {
                Some(name)
                    if resolved.is_none() && !self.category_resolver.is_no_category(Some(name)) =>
                {
                    Some(name.to_string())
                }
                _ => None,
            };

            match missing {
                Some(name) => {
                    let key = name.to_lowercase();
                    if !missing_keys.contains(&key) {
                        missing_keys.push(key);
                        result.missing_categories.push(name.clone());
                    }
                    result.invalid_items.push(InvalidItem {
                        row_index,
                        row: normalized,
                        error: format!("Category \"{}\" not found", name),
                    });
                }
                None => {
                    result.valid_items.push(ValidItem {
                        row_index,
                        category_id: resolved.map(|c| c.id.clone()),
                        fields,
                    });
                }
            }
        }

        Ok(result)
    }
}

/// 使用默认配置对账
pub fn reconcile(rows: &[RawRow], catalog: &[Category]) -> ImportOutcome<ImportResult> {
    ImportReconciler::default().reconcile(rows, catalog)
}
