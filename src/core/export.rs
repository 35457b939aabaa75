use crate::core::quality::score_name;
use crate::domain::model::GeneratedResult;
use crate::domain::ports::Storage;
use crate::utils::error::{BrandError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = BrandError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(BrandError::validation(format!(
                "Unsupported export format '{}'. Valid formats: csv, tsv, json",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    full_name: &'a str,
    score: u32,
}

fn rows(results: &[GeneratedResult]) -> Vec<ExportRow<'_>> {
    results
        .iter()
        .map(|result| ExportRow {
            name: &result.name,
            full_name: &result.full_name,
            score: score_name(&result.name),
        })
        .collect()
}

pub fn render_results(results: &[GeneratedResult], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(&rows(results))?),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delimiter = if format == ExportFormat::Tsv { b'\t' } else { b',' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .has_headers(false)
                .from_writer(Vec::new());

            // 空結果也要輸出表頭
            writer.write_record(["name", "full_name", "score"])?;
            for row in rows(results) {
                writer.serialize(row)?;
            }

            writer
                .into_inner()
                .map_err(|e| BrandError::Io(e.into_error()))
        }
    }
}

/// 將生成結果寫入存儲，回傳檔名
pub async fn export_results<S: Storage>(
    storage: &S,
    file_name: &str,
    results: &[GeneratedResult],
    format: ExportFormat,
) -> Result<String> {
    let data = render_results(results, format)?;
    tracing::debug!(
        "Exporting {} names as {} ({} bytes)",
        results.len(),
        format,
        data.len()
    );
    storage.write_file(file_name, &data).await?;
    Ok(file_name.to_string())
}
