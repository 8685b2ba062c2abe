// ==========================================
// 库存导入导出引擎 - 库存领域模型
// ==========================================
// 用途: 分类目录 / 库存物品 / 对账结果 / 导出行
// 红线: 引擎只读分类目录，持久化由外部存储负责
// ==========================================

use crate::domain::row::NormalizedRow;
use crate::domain::types::ExportField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Category - 分类（外部目录，只读）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: "gray".to_string(),
            icon: None,
        }
    }
}

// ==========================================
// InventoryItem - 库存物品（外部存储返回，导出输入）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub minimum_quantity: Option<f64>,
    pub category_id: Option<String>,
    pub category: Option<Category>, // 存储层关联查询结果
    pub description: Option<String>,
    pub unit: Option<String>,
    pub location_details: Option<String>,
    pub preferred_vendor: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ==========================================
// ValidatedFields - 单行校验通过后的类型化字段
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedFields {
    pub name: String,
    pub quantity: f64,
    pub minimum_quantity: Option<f64>,
    pub category: Option<String>, // 源分类文本（待解析）
    pub description: Option<String>,
    pub unit: Option<String>,
    pub location_details: Option<String>,
    pub preferred_vendor: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

// ==========================================
// ValidItem - 可导入行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidItem {
    pub row_index: usize,            // 1 起始，对应源文件数据行
    pub category_id: Option<String>, // None = 使用默认分类
    #[serde(flatten)]
    pub fields: ValidatedFields,
}

// ==========================================
// InvalidItem - 被拒绝行（从不静默丢弃）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidItem {
    pub row_index: usize,
    pub row: NormalizedRow,
    pub error: String,
}

// ==========================================
// ImportResult - 单次对账结果
// ==========================================
// 不变量: valid_items.len() + invalid_items.len() == 输入行数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub valid_items: Vec<ValidItem>,
    pub invalid_items: Vec<InvalidItem>,
    pub missing_categories: Vec<String>, // 去重，保持首次出现顺序
}

impl ImportResult {
    pub fn total_rows(&self) -> usize {
        self.valid_items.len() + self.invalid_items.len()
    }

    /// 全部错误信息（按输入顺序）
    pub fn errors(&self) -> Vec<&str> {
        self.invalid_items.iter().map(|i| i.error.as_str()).collect()
    }
}

// ==========================================
// ExportRow - 导出行
// ==========================================
// 列顺序固定为 ExportField 声明顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub cells: Vec<(ExportField, String)>,
}

impl ExportRow {
    pub fn get(&self, field: ExportField) -> Option<&str> {
        self.cells
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> Vec<ExportField> {
        self.cells.iter().map(|(f, _)| *f).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|(_, v)| v.as_str()).collect()
    }
}

// ==========================================
// ImportReport - 面向调用方的结果摘要
// ==========================================
// 用途: 成功/失败计数 + 截断后的错误列表 + 缺失分类提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub success_count: usize,
    pub failure_count: usize,
    pub errors_shown: Vec<String>,
    pub errors_hidden: usize,
    pub more_errors_note: Option<String>, // "+N more"
    pub missing_categories: Vec<String>,
    pub missing_category_guidance: Option<String>,
}

impl ImportReport {
    /// 由对账结果生成摘要
    ///
    /// # 参数
    /// - result: 对账结果
    /// - display_limit: 最多展示的错误条数
    pub fn from_result(result: &ImportResult, display_limit: usize) -> Self {
        let errors = result.errors();
        let errors_shown: Vec<String> = errors
            .iter()
            .take(display_limit)
            .map(|e| e.to_string())
            .collect();
        let errors_hidden = errors.len().saturating_sub(errors_shown.len());

        let missing_category_guidance = if result.missing_categories.is_empty() {
            None
        } else {
            Some(format!(
                "Rows referencing these categories were not imported: {}. \
                 Create the categories or rename them in the source file, then import again.",
                result.missing_categories.join(", ")
            ))
        };

        Self {
            success_count: result.valid_items.len(),
            failure_count: result.invalid_items.len(),
            errors_shown,
            errors_hidden,
            more_errors_note: (errors_hidden > 0).then(|| format!("+{} more", errors_hidden)),
            missing_categories: result.missing_categories.clone(),
            missing_category_guidance,
        }
    }
}

// ==========================================
// ImportSummary - 导入服务返回值
// ==========================================
// 用途: 单个文件（或行集合）导入的批次信息 + 对账结果 + 摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub batch_id: String,    // 批次 ID（UUID）
    pub source_name: String, // 源文件名
    pub result: ImportResult,
    pub report: ImportReport,
    pub inserted: usize,     // 实际写入存储的条数
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(row_index: usize) -> InvalidItem {
        InvalidItem {
            row_index,
            row: NormalizedRow::new(),
            error: format!("Row {}: Quantity is required", row_index),
        }
    }

    #[test]
    fn test_report_caps_errors() {
        let result = ImportResult {
            valid_items: Vec::new(),
            invalid_items: (1..=13).map(invalid).collect(),
            missing_categories: Vec::new(),
        };

        let report = ImportReport::from_result(&result, 10);

        assert_eq!(report.failure_count, 13);
        assert_eq!(report.errors_shown.len(), 10);
        assert_eq!(report.errors_hidden, 3);
        assert_eq!(report.more_errors_note.as_deref(), Some("+3 more"));
        assert!(report.missing_category_guidance.is_none());
    }

    #[test]
    fn test_report_missing_category_guidance() {
        let result = ImportResult {
            valid_items: Vec::new(),
            invalid_items: vec![invalid(1)],
            missing_categories: vec!["Tools".to_string(), "Paper".to_string()],
        };

        let report = ImportReport::from_result(&result, 10);

        assert!(report.more_errors_note.is_none());
        let guidance = report.missing_category_guidance.unwrap();
        assert!(guidance.contains("Tools, Paper"));
        assert!(guidance.contains("not imported"));
    }
}
