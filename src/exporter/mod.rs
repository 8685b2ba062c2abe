// ==========================================
// 库存导入导出引擎 - 导出层
// ==========================================
// 职责: 库存物品 → 勾选字段表格（CSV）
// ==========================================

pub mod csv_writer;
pub mod export_serializer;

// 重导出
pub use csv_writer::CsvTableWriter;
pub use export_serializer::{export_file_name, ExportSerializer};
