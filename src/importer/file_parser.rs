// ==========================================
// 库存导入导出引擎 - 表格解码器实现
// ==========================================
// 支持: CSV（.csv）
// 说明: 工作簿（.xlsx/.xls）二进制解码由调用方提供 TabularDecoder 实现
// ==========================================

use crate::domain::row::{CellValue, RawRow};
use crate::importer::error::ImportOutcome;
use crate::importer::traits::TabularDecoder;
use csv::ReaderBuilder;

// ==========================================
// CSV Decoder 实现
// ==========================================
pub struct CsvDecoder {
    delimiter: u8,
}

impl CsvDecoder {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularDecoder for CsvDecoder {
    fn supports(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case("csv")
    }

    fn decode(&self, bytes: &[u8]) -> ImportOutcome<Vec<RawRow>> {
        // 去掉 UTF-8 BOM（Excel 另存的 CSV 常带）
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();

            for (col_idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let value = record.get(col_idx).map(str::trim).unwrap_or("");
                let cell = if value.is_empty() {
                    CellValue::Blank
                } else {
                    CellValue::Text(value.to_string())
                };
                // 重复表头各自保留，由字段归一按列顺序取第一个非空值
                row.push(header.clone(), cell);
            }

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}
