// ==========================================
// 库存导入导出引擎 - 导入模板生成器
// ==========================================
// 职责: 生成覆盖全部标准字段的示例行，可原样回灌导入
// ==========================================

use crate::domain::row::RawRow;
use crate::domain::types::CanonicalField;

pub const TEMPLATE_FILE_NAME: &str = "inventory_import_template.csv";

// 列顺序与 CanonicalField::ALL 一致
const EXAMPLE_ROWS: [[&str; 10]; 3] = [
    [
        "Ballpoint Pens (Blue)",
        "120",
        "24",
        "Office Supplies",
        "Medium point ballpoint pens",
        "box",
        "Supply Room B, Shelf 2",
        "Staples",
        "active",
        "Reorder before term start",
    ],
    [
        "Paper Towels",
        "36",
        "12",
        "Cleaning Supplies",
        "Multi-fold paper towels, 16 packs per case",
        "case",
        "Janitorial Closet, 1st Floor",
        "Grainger",
        "active",
        "",
    ],
    [
        "LED Light Bulbs",
        "8",
        "10",
        "Maintenance",
        "A19 60W-equivalent LED bulbs",
        "each",
        "Maintenance Shop, Bin 14",
        "Home Depot",
        "active",
        "Below minimum, order pending",
    ],
];

pub struct TemplateGenerator;

impl TemplateGenerator {
    /// 生成模板行（确定性输出）
    pub fn generate() -> Vec<RawRow> {
        EXAMPLE_ROWS
            .iter()
            .map(|values| -> RawRow {
                CanonicalField::ALL
                    .iter()
                    .zip(values.iter())
                    .map(|(field, value)| (field.label(), *value))
                    .collect()
            })
            .collect()
    }

    /// 模板列头
    pub fn headers() -> Vec<String> {
        CanonicalField::ALL
            .iter()
            .map(|f| f.label().to_string())
            .collect()
    }
}
