// ==========================================
// 库存导入导出引擎 - 导出序列化器
// ==========================================
// 职责: 库存物品 → 调用方勾选字段的导出行
// 规则:
//   - 列顺序固定为 ExportField 声明顺序，与勾选顺序无关
//   - category: 分类显示名，无分类时取默认标签
//   - last_updated: 按日期格式输出，缺失为空串
//   - 其余字段原样输出，空值为空串
// 红线: 纯函数，与导入路径无耦合
// ==========================================

use crate::config::ImportConfig;
use crate::domain::inventory::{ExportRow, InventoryItem};
use crate::domain::types::ExportField;
use chrono::NaiveDate;

pub struct ExportSerializer {
    default_category_label: String,
    date_format: String,
}

impl ExportSerializer {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            default_category_label: config.default_category_label.clone(),
            date_format: config.export_date_format.clone(),
        }
    }

    /// 勾选字段 → 稳定顺序（去重）
    pub fn ordered_fields(selected: &[ExportField]) -> Vec<ExportField> {
        ExportField::ALL
            .iter()
            .copied()
            .filter(|f| selected.contains(f))
            .collect()
    }

    /// 序列化物品列表
    pub fn serialize(&self, items: &[InventoryItem], selected: &[ExportField]) -> Vec<ExportRow> {
        let fields = Self::ordered_fields(selected);
        items
            .iter()
            .map(|item| ExportRow {
                cells: fields
                    .iter()
                    .map(|field| (*field, self.cell(item, *field)))
                    .collect(),
            })
            .collect()
    }

    fn cell(&self, item: &InventoryItem, field: ExportField) -> String {
        match field {
            ExportField::Name => item.name.clone(),
            ExportField::Category => item
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| self.default_category_label.clone()),
            ExportField::Quantity => item.quantity.to_string(),
            ExportField::MinimumQuantity => opt_number(item.minimum_quantity),
            ExportField::Unit => opt_text(&item.unit),
            ExportField::Description => opt_text(&item.description),
            ExportField::LocationDetails => opt_text(&item.location_details),
            ExportField::PreferredVendor => opt_text(&item.preferred_vendor),
            ExportField::Status => item.status.clone(),
            ExportField::Notes => opt_text(&item.notes),
            ExportField::LastUpdated => item
                .updated_at
                .map(|ts| ts.format(&self.date_format).to_string())
                .unwrap_or_default(),
        }
    }
}

impl Default for ExportSerializer {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_number(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// 导出文件名（含导出日期）
pub fn export_file_name(export_date: NaiveDate) -> String {
    format!("inventory_export_{}.csv", export_date.format("%Y-%m-%d"))
}
