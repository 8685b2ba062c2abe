// ==========================================
// 库存导入导出引擎 - 领域类型定义
// ==========================================
// 职责: 标准字段 / 导出字段枚举
// 红线: 标准字段集合封闭，未知列不进入下游
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 标准字段 (Canonical Field)
// ==========================================
// 所有输入列名最终归一到以下字段之一
// 声明顺序即模板/导出的列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    Quantity,
    MinimumQuantity,
    Category,
    Description,
    Unit,
    LocationDetails,
    PreferredVendor,
    Status,
    Notes,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 10] = [
        CanonicalField::Name,
        CanonicalField::Quantity,
        CanonicalField::MinimumQuantity,
        CanonicalField::Category,
        CanonicalField::Description,
        CanonicalField::Unit,
        CanonicalField::LocationDetails,
        CanonicalField::PreferredVendor,
        CanonicalField::Status,
        CanonicalField::Notes,
    ];

    /// 标准字段标识（snake_case）
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::Quantity => "quantity",
            CanonicalField::MinimumQuantity => "minimum_quantity",
            CanonicalField::Category => "category",
            CanonicalField::Description => "description",
            CanonicalField::Unit => "unit",
            CanonicalField::LocationDetails => "location_details",
            CanonicalField::PreferredVendor => "preferred_vendor",
            CanonicalField::Status => "status",
            CanonicalField::Notes => "notes",
        }
    }

    /// 表格列头（模板/导出使用，可被 FieldNormalizer 还原）
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::Name => "Name",
            CanonicalField::Quantity => "Quantity",
            CanonicalField::MinimumQuantity => "Minimum Quantity",
            CanonicalField::Category => "Category",
            CanonicalField::Description => "Description",
            CanonicalField::Unit => "Unit",
            CanonicalField::LocationDetails => "Location Details",
            CanonicalField::PreferredVendor => "Preferred Vendor",
            CanonicalField::Status => "Status",
            CanonicalField::Notes => "Notes",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 导出字段 (Export Field)
// ==========================================
// 调用方勾选的导出列；声明顺序即输出列顺序，与调用方传入顺序无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportField {
    Name,
    Category,
    Quantity,
    MinimumQuantity,
    Unit,
    Description,
    LocationDetails,
    PreferredVendor,
    Status,
    Notes,
    LastUpdated, // 计算字段
}

impl ExportField {
    pub const ALL: [ExportField; 11] = [
        ExportField::Name,
        ExportField::Category,
        ExportField::Quantity,
        ExportField::MinimumQuantity,
        ExportField::Unit,
        ExportField::Description,
        ExportField::LocationDetails,
        ExportField::PreferredVendor,
        ExportField::Status,
        ExportField::Notes,
        ExportField::LastUpdated,
    ];

    /// 对应的标准字段（last_updated 无对应）
    pub fn canonical(&self) -> Option<CanonicalField> {
        match self {
            ExportField::Name => Some(CanonicalField::Name),
            ExportField::Category => Some(CanonicalField::Category),
            ExportField::Quantity => Some(CanonicalField::Quantity),
            ExportField::MinimumQuantity => Some(CanonicalField::MinimumQuantity),
            ExportField::Unit => Some(CanonicalField::Unit),
            ExportField::Description => Some(CanonicalField::Description),
            ExportField::LocationDetails => Some(CanonicalField::LocationDetails),
            ExportField::PreferredVendor => Some(CanonicalField::PreferredVendor),
            ExportField::Status => Some(CanonicalField::Status),
            ExportField::Notes => Some(CanonicalField::Notes),
            ExportField::LastUpdated => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.canonical() {
            Some(field) => field.as_str(),
            None => "last_updated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.canonical() {
            Some(field) => field.label(),
            None => "Last Updated",
        }
    }
}

impl fmt::Display for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExportField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| format!("未知导出字段: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_field_from_str() {
        assert_eq!(
            "minimum_quantity".parse::<ExportField>().unwrap(),
            ExportField::MinimumQuantity
        );
        assert_eq!(
            " Last_Updated ".parse::<ExportField>().unwrap(),
            ExportField::LastUpdated
        );
        assert!("price".parse::<ExportField>().is_err());
    }

    #[test]
    fn test_export_field_labels() {
        assert_eq!(ExportField::LocationDetails.label(), "Location Details");
        assert_eq!(ExportField::LastUpdated.label(), "Last Updated");
        assert_eq!(ExportField::LastUpdated.canonical(), None);
    }
}
