// Small dev utility: write the import template, or dry-run an import against a catalog.
//
// Usage:
//   cargo run --bin inventory_io -- template [out.csv]
//   cargo run --bin inventory_io -- check <file.csv> <catalog.json>
//
// `check` never persists anything; it prints the reconciliation report as JSON.
//
// Environment:
//   INVENTORY_IMPORT_CONFIG      JSON config file (defaults otherwise)
//   INVENTORY_IMPORT_LOG_FORMAT  `pretty` (default) or `json`

use inventory_import::config::config_keys;
use inventory_import::exporter::CsvTableWriter;
use inventory_import::importer::{
    ImportReconciler, Reconciler, TabularDecoder, TemplateGenerator, TEMPLATE_FILE_NAME,
};
use inventory_import::logging::{self, LogFormat};
use inventory_import::{Category, CsvDecoder, FileGuard, ImportConfig, ImportReport};
use std::fs::File;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_format: LogFormat = std::env::var(config_keys::LOG_FORMAT)
        .unwrap_or_default()
        .parse()?;
    logging::init_with(log_format)?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    let config = match std::env::var(config_keys::CONFIG_FILE) {
        Ok(path) => ImportConfig::from_json_file(path)?,
        Err(_) => ImportConfig::default(),
    }
    .with_env_overrides()?;

    match command.as_str() {
        "template" => {
            let out_path = args
                .next()
                .unwrap_or_else(|| TEMPLATE_FILE_NAME.to_string());
            let file = File::create(&out_path)?;
            CsvTableWriter.write_raw_rows(file, &TemplateGenerator::generate())?;
            println!("template={}", out_path);
        }
        "check" => {
            let file_path = args.next().ok_or("missing <file.csv>")?;
            let catalog_path = args.next().ok_or("missing <catalog.json>")?;

            // Guard runs on the file size before any bytes are read.
            let extension = FileGuard::new(&config).check_path(Path::new(&file_path))?;
            let decoder = CsvDecoder::new();
            if !decoder.supports(&extension) {
                return Err(format!("no decoder for .{} files", extension).into());
            }
            let bytes = std::fs::read(&file_path)?;

            let catalog: Vec<Category> =
                serde_json::from_str(&std::fs::read_to_string(&catalog_path)?)?;
            let rows = decoder.decode(&bytes)?;
            let result = ImportReconciler::new(&config).reconcile(&rows, &catalog)?;
            let report = ImportReport::from_result(&result, config.error_display_limit);

            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            return Err("usage: inventory_io template [out.csv] | check <file.csv> <catalog.json>".into());
        }
    }

    Ok(())
}
