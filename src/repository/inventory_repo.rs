// ==========================================
// 库存导入导出引擎 - 库存 Repository Trait
// ==========================================
// 职责: 定义外部存储接口（分类目录读取、物品写入/读取）
// 红线: 引擎不提供实现，持久化由外部存储负责
// ==========================================

use crate::domain::inventory::{Category, InventoryItem, ValidItem};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// InventoryRepository Trait
// ==========================================
// 用途: 导入服务的外部协作方
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// 读取当前分类目录（对账前必须完成）
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// 批量写入可导入行
    ///
    /// # 参数
    /// - items: 可导入行（category_id 为 None 时由存储使用默认分类）
    ///
    /// # 返回
    /// - Ok(usize): 写入条数
    async fn insert_items(&self, items: Vec<ValidItem>) -> RepositoryResult<usize>;

    /// 读取全部物品（含关联分类），用于导出
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>>;
}
