// ==========================================
// 库存导入导出引擎 - 领域模型层
// ==========================================
// 职责: 定义分类、行数据、对账结果、导出行等领域类型
// 红线: 不含 I/O，不含对账逻辑
// ==========================================

pub mod inventory;
pub mod row;
pub mod types;

// 重导出核心类型
pub use inventory::{
    Category, ExportRow, ImportReport, ImportResult, ImportSummary, InvalidItem, InventoryItem,
    ValidItem, ValidatedFields,
};
pub use row::{CellValue, NormalizedRow, RawRow};
pub use types::{CanonicalField, ExportField};
