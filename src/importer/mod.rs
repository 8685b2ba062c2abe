// ==========================================
// 库存导入导出引擎 - 导入层
// ==========================================
// 职责: 文件守卫、表格解码、字段归一、行校验、分类解析、对账
// 红线: 对账引擎为纯函数，不做 I/O，不打日志
// ==========================================

pub mod category_resolver;
pub mod error;
pub mod field_normalizer;
pub mod file_guard;
pub mod file_parser;
pub mod inventory_importer_impl;
pub mod reconciler;
pub mod row_validator;
pub mod template;
pub mod traits;

// 重导出 Trait
pub use traits::{
    CategoryResolver, FieldNormalizer, InventoryImporter, Reconciler, RowValidator,
    TabularDecoder,
};

// 重导出实现
pub use category_resolver::CategoryResolver as CategoryResolverImpl;
pub use field_normalizer::FieldNormalizer as FieldNormalizerImpl;
pub use field_normalizer::{clean_key, normalize_key, FieldKey, FIELD_ALIASES};
pub use file_guard::{extension_of, FileGuard};
pub use file_parser::CsvDecoder;
pub use inventory_importer_impl::InventoryImporterImpl;
pub use reconciler::{reconcile, ImportReconciler};
pub use row_validator::RowValidator as RowValidatorImpl;
pub use template::{TemplateGenerator, TEMPLATE_FILE_NAME};

// 重导出错误类型
pub use error::{ImportError, ImportOutcome};
