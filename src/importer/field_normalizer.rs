// ==========================================
// 库存导入导出引擎 - 字段归一器实现
// ==========================================
// 职责: 源列名 → 标准字段（别名表查找）
// 规则: 小写 → 空白串替换为 '_' → 去除 [a-z0-9_] 以外字符 → 查别名表
// ==========================================

use crate::domain::row::{NormalizedRow, RawRow};
use crate::domain::types::CanonicalField;
use crate::importer::traits::FieldNormalizer as FieldNormalizerTrait;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ==========================================
// 别名表（声明式：新增别名只改数据）
// ==========================================
pub static FIELD_ALIASES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Name,
        &["name", "item_name", "item", "product", "product_name", "title"],
    ),
    (
        CanonicalField::Quantity,
        &["quantity", "qty", "amount", "stock"],
    ),
    (
        CanonicalField::MinimumQuantity,
        &["minimum_quantity", "min_quantity", "minimum", "min", "reorder_level"],
    ),
    (
        CanonicalField::Category,
        &["category", "category_name", "type", "group"],
    ),
    (
        CanonicalField::Description,
        &["description", "desc", "details"],
    ),
    (
        CanonicalField::Unit,
        &["unit", "units", "uom", "unit_of_measure"],
    ),
    (
        CanonicalField::LocationDetails,
        &["location_details", "location", "storage_location", "room"],
    ),
    (
        CanonicalField::PreferredVendor,
        &["preferred_vendor", "vendor", "supplier"],
    ),
    (CanonicalField::Status, &["status", "state"]),
    (
        CanonicalField::Notes,
        &["notes", "note", "comments", "remarks"],
    ),
];

// 反向索引：别名 → 标准字段，首次使用时构建
static ALIAS_INDEX: Lazy<HashMap<&'static str, CanonicalField>> = Lazy::new(|| {
    FIELD_ALIASES
        .iter()
        .flat_map(|(field, aliases)| aliases.iter().map(move |alias| (*alias, *field)))
        .collect()
});

// ==========================================
// FieldKey - 归一结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey {
    Canonical(CanonicalField),
    Unknown(String), // 清洗后的原列名，下游忽略
}

impl FieldKey {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKey::Canonical(field) => field.as_str(),
            FieldKey::Unknown(key) => key.as_str(),
        }
    }

    pub fn canonical(&self) -> Option<CanonicalField> {
        match self {
            FieldKey::Canonical(field) => Some(*field),
            FieldKey::Unknown(_) => None,
        }
    }
}

/// 清洗列名（不查别名表）
pub fn clean_key(raw_key: &str) -> String {
    let lowered = raw_key.trim().to_lowercase();
    let underscored = lowered.split_whitespace().collect::<Vec<_>>().join("_");
    underscored
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// 列名 → 标准字段标识；未匹配时返回清洗后的列名
pub fn normalize_key(raw_key: &str) -> String {
    FieldNormalizer.normalize(raw_key).as_str().to_string()
}

pub struct FieldNormalizer;

impl FieldNormalizerTrait for FieldNormalizer {
    fn normalize(&self, raw_key: &str) -> FieldKey {
        let cleaned = clean_key(raw_key);
        match ALIAS_INDEX.get(cleaned.as_str()) {
            Some(field) => FieldKey::Canonical(*field),
            None => FieldKey::Unknown(cleaned),
        }
    }

    fn normalize_row(&self, row: &RawRow) -> NormalizedRow {
        let mut normalized = NormalizedRow::new();
        for (key, value) in row.iter() {
            let Some(field) = self.normalize(key).canonical() else {
                continue;
            };
            // 多列归一到同一字段时，按列顺序取第一个非空值
            if !normalized.has_value(field) {
                normalized.insert(field, value.clone());
            }
        }
        normalized
    }
}
