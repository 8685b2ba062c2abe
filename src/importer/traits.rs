// ==========================================
// 库存导入导出引擎 - 导入组件 Trait
// ==========================================
// 职责: 定义导入管道各组件接口（不包含实现）
// 管道: 解码 → 字段归一 → 行校验 → 分类解析 → 结果分区
// ==========================================

use crate::domain::inventory::{Category, ImportResult, ImportSummary, ValidatedFields};
use crate::domain::row::{NormalizedRow, RawRow};
use crate::domain::types::{CanonicalField, ExportField};
use crate::importer::error::ImportOutcome;
use crate::importer::field_normalizer::FieldKey;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// ==========================================
// InventoryImporter Trait
// ==========================================
// 用途: 导入/导出服务主接口（协调外部目录与存储）
// 实现者: InventoryImporterImpl
#[async_trait]
pub trait InventoryImporter: Send + Sync {
    /// 从文件导入库存数据
    ///
    /// # 导入流程
    /// 1. 文件守卫（大小/类型）
    /// 2. 解码为 RawRow 序列
    /// 3. 拉取分类目录（必须在对账前完成）
    /// 4. 对账（归一 → 校验 → 分类解析）
    /// 5. 有效行分批写入存储
    ///
    /// # 返回
    /// - Ok(ImportSummary): 批次信息 + 对账结果 + 摘要
    /// - Err: 整文件级错误（无部分结果）
    async fn import_file(&self, file_path: &Path) -> ImportOutcome<ImportSummary>;

    /// 对已解码的行执行导入（跳过文件守卫与解码）
    async fn import_rows(
        &self,
        source_name: &str,
        rows: Vec<RawRow>,
    ) -> ImportOutcome<ImportSummary>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 每个文件独立导入，某个文件失败不影响其他文件
    /// - 返回顺序与输入顺序一致
    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<Result<ImportSummary, String>>;

    /// 导出库存到 CSV 文件
    ///
    /// # 参数
    /// - fields: 调用方勾选的导出字段
    /// - out_dir: 输出目录（文件名含导出日期）
    /// - export_date: 导出日期
    async fn export_file(
        &self,
        fields: &[ExportField],
        out_dir: &Path,
        export_date: NaiveDate,
    ) -> ImportOutcome<PathBuf>;

    /// 写出导入模板
    async fn write_template(&self, out_path: &Path) -> ImportOutcome<()>;
}

// ==========================================
// TabularDecoder Trait
// ==========================================
// 用途: 表格文件 → 有序行映射（首行为表头）
// 实现者: CsvDecoder；工作簿解码由调用方自行提供
pub trait TabularDecoder: Send + Sync {
    /// 是否支持该扩展名（小写，不含 '.'）
    fn supports(&self, extension: &str) -> bool;

    /// 解码文件内容
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 数据行（不含表头，已跳过空行）
    /// - Err: 格式错误
    fn decode(&self, bytes: &[u8]) -> ImportOutcome<Vec<RawRow>>;
}

// ==========================================
// FieldNormalizer Trait
// ==========================================
// 用途: 源列名 → 标准字段
// 实现者: FieldNormalizerImpl
pub trait FieldNormalizer: Send + Sync {
    /// 归一单个列名；未知列原样（清洗后）返回，不视为错误
    fn normalize(&self, raw_key: &str) -> FieldKey;

    /// 归一整行，丢弃未知列
    fn normalize_row(&self, row: &RawRow) -> NormalizedRow;

    /// 表头是否包含名称列（用于整文件格式判定）
    fn recognizes_name_column(&self, header_row: &RawRow) -> bool {
        header_row
            .keys()
            .any(|key| self.normalize(key).canonical() == Some(CanonicalField::Name))
    }
}

// ==========================================
// CategoryResolver Trait
// ==========================================
// 用途: 自由文本分类名 → 目录中的分类
// 实现者: CategoryResolverImpl
pub trait CategoryResolver: Send + Sync {
    /// 是否表示"无分类"（空/空白/哨兵值）
    fn is_no_category(&self, category_name: Option<&str>) -> bool;

    /// 解析分类
    ///
    /// # 返回
    /// - Some(&Category): 精确或模糊匹配成功
    /// - None: 无分类，或未找到（由调用方结合 is_no_category 区分）
    fn resolve<'a>(
        &self,
        category_name: Option<&str>,
        catalog: &'a [Category],
    ) -> Option<&'a Category>;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 单行校验与类型转换
// 实现者: RowValidatorImpl
pub trait RowValidator: Send + Sync {
    /// 校验一行；首个失败规则即返回
    ///
    /// # 参数
    /// - row: 归一后的行
    /// - row_index: 1 起始行号（用于错误信息）
    ///
    /// # 返回
    /// - Ok(ValidatedFields): 类型化字段
    /// - Err(String): 带行号的可读错误
    fn validate(&self, row: &NormalizedRow, row_index: usize) -> Result<ValidatedFields, String>;
}

// ==========================================
// Reconciler Trait
// ==========================================
// 用途: 整表对账（纯函数，无 I/O）
// 实现者: ImportReconciler
pub trait Reconciler: Send + Sync {
    fn reconcile(&self, rows: &[RawRow], catalog: &[Category]) -> ImportOutcome<ImportResult>;
}
