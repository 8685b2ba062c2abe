// ==========================================
// 库存导入导出引擎 - 导入服务实现
// ==========================================
// 职责: 串联外部协作方与纯对账引擎
// 流程: 守卫 → 解码 → 拉取目录 → 对账 → 分批落库 → 摘要
// 说明: 日志只在本层输出，对账引擎本身不打日志
// ==========================================

use crate::config::ImportConfig;
use crate::domain::inventory::{ImportReport, ImportSummary};
use crate::domain::row::RawRow;
use crate::domain::types::ExportField;
use crate::exporter::{export_file_name, CsvTableWriter, ExportSerializer};
use crate::importer::error::{ImportError, ImportOutcome};
use crate::importer::file_guard::FileGuard;
use crate::importer::file_parser::CsvDecoder;
use crate::importer::reconciler::ImportReconciler;
use crate::importer::template::TemplateGenerator;
use crate::importer::traits::{InventoryImporter, Reconciler, TabularDecoder};
use crate::repository::InventoryRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// InventoryImporterImpl - 导入服务实现
// ==========================================
pub struct InventoryImporterImpl<R>
where
    R: InventoryRepository,
{
    // 外部存储
    repo: R,

    // 配置
    config: ImportConfig,

    // 导入组件
    file_guard: FileGuard,
    decoders: Vec<Box<dyn TabularDecoder>>,
    reconciler: Box<dyn Reconciler>,

    // 导出组件
    serializer: ExportSerializer,
}

impl<R> InventoryImporterImpl<R>
where
    R: InventoryRepository,
{
    /// 创建导入服务（内置 CSV 解码器）
    pub fn new(repo: R, config: ImportConfig) -> Self {
        Self {
            file_guard: FileGuard::new(&config),
            decoders: vec![Box::new(CsvDecoder::new())],
            reconciler: Box::new(ImportReconciler::new(&config)),
            serializer: ExportSerializer::new(&config),
            repo,
            config,
        }
    }

    /// 追加解码器（如工作簿解码）；先注册者优先
    pub fn with_decoder(mut self, decoder: Box<dyn TabularDecoder>) -> Self {
        self.decoders.push(decoder);
        self
    }

    /// 替换对账器
    pub fn with_reconciler(mut self, reconciler: Box<dyn Reconciler>) -> Self {
        self.reconciler = reconciler;
        self
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    fn decoder_for(&self, extension: &str) -> ImportOutcome<&dyn TabularDecoder> {
        self.decoders
            .iter()
            .find(|d| d.supports(extension))
            .map(|d| d.as_ref())
            .ok_or_else(|| ImportError::UnsupportedFormat(extension.to_string()))
    }
}

#[async_trait]
impl<R> InventoryImporter for InventoryImporterImpl<R>
where
    R: InventoryRepository,
{
    #[instrument(skip(self, file_path), fields(file = %file_path.display()))]
    async fn import_file(&self, file_path: &Path) -> ImportOutcome<ImportSummary> {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        // === 步骤 1: 文件守卫 ===
        let metadata = tokio::fs::metadata(file_path).await?;
        let extension = self.file_guard.check(&file_name, metadata.len(), None)?;
        let decoder = self.decoder_for(&extension)?;

        // === 步骤 2: 解码 ===
        let bytes = tokio::fs::read(file_path).await?;
        let rows = decoder.decode(&bytes).map_err(|e| {
            warn!(error = %e, "文件解码失败");
            e
        })?;
        info!(total_rows = rows.len(), "文件解码完成");

        self.import_rows(&file_name, rows).await
    }

    #[instrument(skip(self, rows), fields(batch_id))]
    async fn import_rows(
        &self,
        source_name: &str,
        rows: Vec<RawRow>,
    ) -> ImportOutcome<ImportSummary> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        info!(source = %source_name, rows = rows.len(), "开始导入库存数据");

        // === 步骤 3: 拉取分类目录 ===
        let catalog = self.repo.list_categories().await.map_err(|e| {
            warn!(error = %e, "分类目录读取失败");
            ImportError::CatalogUnavailable(e.to_string())
        })?;
        debug!(categories = catalog.len(), "分类目录读取完成");

        // === 步骤 4: 对账 ===
        let result = self.reconciler.reconcile(&rows, &catalog).map_err(|e| {
            warn!(error = %e, "文件格式不可识别，整文件拒绝");
            e
        })?;
        info!(
            valid = result.valid_items.len(),
            invalid = result.invalid_items.len(),
            missing_categories = result.missing_categories.len(),
            "对账完成"
        );

        // === 步骤 5: 分批落库 ===
        let mut inserted = 0;
        for chunk in result.valid_items.chunks(self.config.insert_batch_size.max(1)) {
            inserted += self.repo.insert_items(chunk.to_vec()).await?;
            debug!(inserted, "批次写入完成");
        }

        // === 步骤 6: 摘要 ===
        let report = ImportReport::from_result(&result, self.config.error_display_limit);
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        info!(
            batch_id = %batch_id,
            success = report.success_count,
            failed = report.failure_count,
            inserted,
            elapsed_ms,
            "库存导入完成"
        );

        Ok(ImportSummary {
            batch_id,
            source_name: source_name.to_string(),
            result,
            report,
            inserted,
            elapsed_ms,
        })
    }

    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<Result<ImportSummary, String>> {
        info!(files = file_paths.len(), "开始批量导入");
        let imports = file_paths.iter().map(|path| async move {
            self.import_file(path).await.map_err(|e| {
                warn!(file = %path.display(), error = %e, "文件导入失败");
                format!("{}: {}", path.display(), e)
            })
        });
        futures::future::join_all(imports).await
    }

    #[instrument(skip(self, fields, out_dir))]
    async fn export_file(
        &self,
        fields: &[ExportField],
        out_dir: &Path,
        export_date: NaiveDate,
    ) -> ImportOutcome<PathBuf> {
        let items = self.repo.list_items().await?;
        let ordered = ExportSerializer::ordered_fields(fields);
        let rows = self.serializer.serialize(&items, &ordered);

        let mut buffer = Vec::new();
        CsvTableWriter.write_export_rows(&mut buffer, &ordered, &rows)?;

        let path = out_dir.join(export_file_name(export_date));
        tokio::fs::write(&path, buffer).await?;
        info!(path = %path.display(), rows = rows.len(), "库存导出完成");
        Ok(path)
    }

    async fn write_template(&self, out_path: &Path) -> ImportOutcome<()> {
        let mut buffer = Vec::new();
        CsvTableWriter.write_raw_rows(&mut buffer, &TemplateGenerator::generate())?;
        tokio::fs::write(out_path, buffer).await?;
        info!(path = %out_path.display(), "导入模板已生成");
        Ok(())
    }
}
