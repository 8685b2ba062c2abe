// ==========================================
// 库存导入导出引擎 - 配置层
// ==========================================
// 职责: 文件守卫阈值、展示上限、缺省值等运行配置
// ==========================================

pub mod import_config;

// 重导出
pub use import_config::{config_keys, ImportConfig};
