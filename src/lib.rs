// ==========================================
// 库存导入导出引擎 - 核心库
// ==========================================
// 职责: 表格文件 → 库存记录的对账导入，库存记录 → CSV 导出
// 定位: 分类目录与持久化均由外部协作方提供
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 外部存储接口
pub mod repository;

// 导入层 - 对账引擎与导入服务
pub mod importer;

// 导出层 - 字段序列化与 CSV 写出
pub mod exporter;

// 配置层 - 导入配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CanonicalField, ExportField};

// 领域实体
pub use domain::{
    Category, CellValue, ExportRow, ImportReport, ImportResult, ImportSummary, InvalidItem,
    InventoryItem, NormalizedRow, RawRow, ValidItem, ValidatedFields,
};

// 导入
pub use importer::{
    reconcile, CsvDecoder, FileGuard, ImportError, ImportOutcome, ImportReconciler,
    InventoryImporter, InventoryImporterImpl, TemplateGenerator,
};

// 导出
pub use exporter::{export_file_name, CsvTableWriter, ExportSerializer};

// 配置
pub use config::ImportConfig;

// 仓储
pub use repository::{InventoryRepository, RepositoryError, RepositoryResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存导入导出引擎";
