// ==========================================
// 库存导入导出引擎 - 行数据模型
// ==========================================
// 用途: 导入管道中间产物（解码 → RawRow → NormalizedRow）
// 生命周期: 仅在单次对账调用内
// ==========================================

use crate::domain::types::CanonicalField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// CellValue - 单元格标量值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Blank,
}

impl CellValue {
    /// 空值判定：Blank 或去空白后为空的文本
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Blank => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// 去空白后的文本（空值返回 None）
    pub fn trimmed_text(&self) -> Option<String> {
        match self {
            CellValue::Blank => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(n) => Some(n.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Blank => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

// ==========================================
// RawRow - 源文件原始行
// ==========================================
// 保留源列顺序：表头识别与同名列冲突处理依赖该顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入列值；同名列覆盖原值但保留原位置
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    /// 追加列值，不合并同名列（解码器使用，表头重复时保留每一列）
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((key.into(), value.into()));
    }

    /// 链式构造（测试与模板使用）
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// 按列名取值；同名列取第一列
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 整行空白（解码器据此跳过空行）
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_blank())
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

// ==========================================
// NormalizedRow - 标准字段行
// ==========================================
// 键集合封闭（CanonicalField），未知列已在归一阶段丢弃
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    fields: BTreeMap<CanonicalField, CellValue>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CanonicalField, value: CellValue) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: CanonicalField) -> Option<&CellValue> {
        self.fields.get(&field)
    }

    /// 字段存在且非空
    pub fn has_value(&self, field: CanonicalField) -> bool {
        self.get(field).map(|v| !v.is_blank()).unwrap_or(false)
    }

    /// 可选文本字段：去空白，空值为 None
    pub fn text(&self, field: CanonicalField) -> Option<String> {
        self.get(field).and_then(CellValue::trimmed_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &CellValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_preserves_column_order() {
        let row = RawRow::new()
            .with("Qty", "5")
            .with("Name", "Pens")
            .with("Qty", "7");

        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, vec!["Qty", "Name"]);
        assert_eq!(row.get("Qty"), Some(&CellValue::from("7")));
    }

    #[test]
    fn test_cell_value_blank() {
        assert!(CellValue::Blank.is_blank());
        assert!(CellValue::from("   ").is_blank());
        assert!(!CellValue::from(0.0).is_blank());
        assert_eq!(CellValue::from("  a ").trimmed_text(), Some("a".to_string()));
        assert_eq!(CellValue::from(50.0).trimmed_text(), Some("50".to_string()));
    }

    #[test]
    fn test_cell_value_untagged_json() {
        let values: Vec<CellValue> = serde_json::from_str(r#"["x", 3.5, null]"#).unwrap();
        assert_eq!(
            values,
            vec![CellValue::from("x"), CellValue::Number(3.5), CellValue::Blank]
        );
    }

    #[test]
    fn test_normalized_row_text_trims() {
        let mut row = NormalizedRow::new();
        row.insert(CanonicalField::Unit, CellValue::from("  box "));
        row.insert(CanonicalField::Notes, CellValue::from(""));

        assert_eq!(row.text(CanonicalField::Unit), Some("box".to_string()));
        assert_eq!(row.text(CanonicalField::Notes), None);
        assert!(!row.has_value(CanonicalField::Notes));
        assert!(!row.has_value(CanonicalField::Name));
    }
}
