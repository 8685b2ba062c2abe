// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的内存存储、分类目录与测试数据生成
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use inventory_import::repository::{InventoryRepository, RepositoryError, RepositoryResult};
use inventory_import::{Category, InventoryItem, RawRow, ValidItem};
use std::sync::{Arc, Mutex};

// ==========================================
// 内存存储
// ==========================================

#[derive(Default)]
struct RepoState {
    categories: Vec<Category>,
    items: Vec<InventoryItem>,
    inserted: Vec<ValidItem>,
    insert_calls: usize,
    fail_catalog: bool,
    fail_insert: bool,
    fail_items: bool,
}

/// 内存版 InventoryRepository（克隆后共享同一份状态）
#[derive(Clone, Default)]
pub struct InMemoryInventoryRepository {
    state: Arc<Mutex<RepoState>>,
}

impl InMemoryInventoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().categories = categories;
        repo
    }

    pub fn with_items(self, items: Vec<InventoryItem>) -> Self {
        self.state.lock().unwrap().items = items;
        self
    }

    /// 分类目录读取失败
    pub fn failing_catalog(self) -> Self {
        self.state.lock().unwrap().fail_catalog = true;
        self
    }

    /// 写入失败
    pub fn failing_insert(self) -> Self {
        self.state.lock().unwrap().fail_insert = true;
        self
    }

    /// 物品读取失败（导出路径）
    pub fn failing_items(self) -> Self {
        self.state.lock().unwrap().fail_items = true;
        self
    }

    pub fn inserted(&self) -> Vec<ValidItem> {
        self.state.lock().unwrap().inserted.clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().unwrap().insert_calls
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        if state.fail_catalog {
            return Err(RepositoryError::ConnectionError(
                "catalog store offline".to_string(),
            ));
        }
        Ok(state.categories.clone())
    }

    async fn insert_items(&self, items: Vec<ValidItem>) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if state.fail_insert {
            return Err(RepositoryError::WriteError("disk full".to_string()));
        }
        state.insert_calls += 1;
        let count = items.len();
        state.inserted.extend(items);
        Ok(count)
    }

    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        let state = self.state.lock().unwrap();
        if state.fail_items {
            return Err(RepositoryError::QueryError("items table locked".to_string()));
        }
        Ok(state.items.clone())
    }
}

// ==========================================
// 测试数据
// ==========================================

/// 常用分类目录
pub fn office_catalog() -> Vec<Category> {
    vec![
        Category::new("cat-office", "Office Supplies"),
        Category::new("cat-cleaning", "Cleaning Supplies"),
        Category::new("cat-maint", "Maintenance"),
    ]
}

/// 由名称列表构造分类目录（id 为 "cat-{序号}"）
pub fn catalog_of(names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Category::new(format!("cat-{}", idx + 1), *name))
        .collect()
}

/// 构造一行源数据
pub fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

/// 构造一条库存物品
pub fn inventory_item(id: &str, name: &str, quantity: f64, category: Option<Category>) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        minimum_quantity: None,
        category_id: category.as_ref().map(|c| c.id.clone()),
        category,
        description: None,
        unit: None,
        location_details: None,
        preferred_vendor: None,
        status: "active".to_string(),
        notes: None,
        updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()),
    }
}
