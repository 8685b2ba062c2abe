// ==========================================
// 库存导入导出引擎 - 行校验器实现
// ==========================================
// 职责: 必填校验 + 数值转换 + 可选字段清洗
// 规则（按序，首个失败即返回）:
//   1. name 必填且非空
//   2. quantity 必填
//   3. quantity 为 >= 0 的数值
//   4. minimum_quantity 若非空则为 >= 0 的数值
// 说明: status 不做枚举校验，交由存储层处理
// ==========================================

use crate::domain::inventory::ValidatedFields;
use crate::domain::row::{CellValue, NormalizedRow};
use crate::domain::types::CanonicalField;
use crate::importer::traits::RowValidator as RowValidatorTrait;

pub struct RowValidator {
    default_status: String,
}

impl RowValidator {
    pub fn new(default_status: impl Into<String>) -> Self {
        Self {
            default_status: default_status.into(),
        }
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(crate::config::ImportConfig::default().default_status)
    }
}

/// 解析非负数值；空值返回 Ok(None)
fn parse_non_negative(value: Option<&CellValue>) -> Result<Option<f64>, ()> {
    let number = match value {
        None | Some(CellValue::Blank) => return Ok(None),
        Some(CellValue::Number(n)) => *n,
        Some(CellValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<f64>().map_err(|_| ())?
        }
    };

    if number.is_finite() && number >= 0.0 {
        Ok(Some(number))
    } else {
        Err(())
    }
}

impl RowValidatorTrait for RowValidator {
    fn validate(&self, row: &NormalizedRow, row_index: usize) -> Result<ValidatedFields, String> {
        let name = row.text(CanonicalField::Name).ok_or_else(|| {
            format!(
                "Row {}: Name is required and must be a non-empty string",
                row_index
            )
        })?;

        if !row.has_value(CanonicalField::Quantity) {
            return Err(format!("Row {}: Quantity is required", row_index));
        }
        let quantity = parse_non_negative(row.get(CanonicalField::Quantity))
            .ok()
            .flatten()
            .ok_or_else(|| {
                format!("Row {}: Quantity must be a non-negative number", row_index)
            })?;

        let minimum_quantity = parse_non_negative(row.get(CanonicalField::MinimumQuantity))
            .map_err(|_| {
                format!(
                    "Row {}: Minimum quantity must be a non-negative number",
                    row_index
                )
            })?;

        Ok(ValidatedFields {
            name,
            quantity,
            minimum_quantity,
            category: row.text(CanonicalField::Category),
            description: row.text(CanonicalField::Description),
            unit: row.text(CanonicalField::Unit),
            location_details: row.text(CanonicalField::LocationDetails),
            preferred_vendor: row.text(CanonicalField::PreferredVendor),
            status: row
                .text(CanonicalField::Status)
                .unwrap_or_else(|| self.default_status.clone()),
            notes: row.text(CanonicalField::Notes),
        })
    }
}
