// ==========================================
// 库存导入导出引擎 - CSV 表格写出
// ==========================================
// 用途: 模板与导出共用；列头与导入别名规则兼容，可原样回灌
// ==========================================

use crate::domain::inventory::ExportRow;
use crate::domain::row::RawRow;
use crate::domain::types::ExportField;
use crate::importer::error::ImportOutcome;
use csv::WriterBuilder;
use std::io::Write;

pub struct CsvTableWriter;

impl CsvTableWriter {
    /// 写出表头 + 数据行
    pub fn write_table<W, I>(&self, out: W, headers: &[String], rows: I) -> ImportOutcome<()>
    where
        W: Write,
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut writer = WriterBuilder::new().flexible(false).from_writer(out);
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// 写出导出行；列头取字段显示名
    pub fn write_export_rows<W: Write>(
        &self,
        out: W,
        fields: &[ExportField],
        rows: &[ExportRow],
    ) -> ImportOutcome<()> {
        let headers: Vec<String> = fields.iter().map(|f| f.label().to_string()).collect();
        self.write_table(
            out,
            &headers,
            rows.iter()
                .map(|r| r.values().into_iter().map(str::to_string).collect()),
        )
    }

    /// 写出原始行（模板）；列头取第一行的列名
    pub fn write_raw_rows<W: Write>(&self, out: W, rows: &[RawRow]) -> ImportOutcome<()> {
        let headers: Vec<String> = rows
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default();
        self.write_table(
            out,
            &headers,
            rows.iter().map(|row| {
                headers
                    .iter()
                    .map(|h| row.get(h).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            }),
        )
    }
}
