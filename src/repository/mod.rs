// ==========================================
// 库存导入导出引擎 - 数据仓储接口
// ==========================================
// 职责: 外部存储协作方接口，屏蔽存储细节
// ==========================================

pub mod error;
pub mod inventory_repo;

// 重导出
pub use error::{RepositoryError, RepositoryResult};
pub use inventory_repo::InventoryRepository;
