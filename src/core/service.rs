use crate::core::generator::generate_names;
use crate::core::keywords::parse_bulk_keywords;
use crate::domain::model::{
    BrandIndustry, BrandKeyword, BulkImportReport, GeneratedNameRecord, GenerationRequest,
    GenerationResponse, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::domain::ports::{CatalogRepository, GenerationLog};
use crate::utils::error::{BrandError, Result};
use crate::utils::validation::require_text;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;

pub const DEFAULT_AUDIT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    /// 每次生成最多寫入幾筆稽核紀錄
    pub audit_limit: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            audit_limit: DEFAULT_AUDIT_LIMIT,
        }
    }
}

/// 品牌名稱工具的應用服務。所有後端都以參數注入。
#[derive(Clone)]
pub struct BrandService {
    catalog: Arc<dyn CatalogRepository>,
    log: Arc<dyn GenerationLog>,
    settings: ServiceSettings,
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl BrandService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        log: Arc<dyn GenerationLog>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            catalog,
            log,
            settings,
        }
    }

    pub async fn list_industries(&self) -> Result<Vec<BrandIndustry>> {
        self.catalog.list_industries().await
    }

    pub async fn create_industry(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<BrandIndustry> {
        let name = require_text(name, "Industry name is required")?;
        let industry = self
            .catalog
            .create_industry(NewIndustry {
                name: name.to_string(),
                description: optional_text(description),
            })
            .await?;
        tracing::info!("Created industry {} ({})", industry.name, industry.id);
        Ok(industry)
    }

    pub async fn update_industry(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<BrandIndustry> {
        let id = require_text(id, "Industry ID is required")?;
        let name = require_text(name, "Industry name is required")?;
        self.catalog
            .update_industry(
                id,
                IndustryUpdate {
                    name: name.to_string(),
                    description: optional_text(description),
                },
            )
            .await
    }

    pub async fn delete_industry(&self, id: &str) -> Result<()> {
        let id = require_text(id, "Industry ID is required")?;
        self.catalog.delete_industry(id).await?;
        tracing::info!("Deleted industry {} and its keywords", id);
        Ok(())
    }

    pub async fn list_keywords(&self, industry_id: &str) -> Result<Vec<BrandKeyword>> {
        let industry_id = require_text(industry_id, "Industry ID is required")?;
        self.catalog.list_keywords(industry_id).await
    }

    pub async fn add_keyword(&self, industry_id: &str, keyword: &str) -> Result<BrandKeyword> {
        const MESSAGE: &str = "Industry ID and keyword are required";
        let industry_id = require_text(industry_id, MESSAGE)?;
        let keyword = require_text(keyword, MESSAGE)?;

        self.catalog
            .create_keyword(NewKeyword {
                industry_id: industry_id.to_string(),
                keyword: keyword.to_string(),
            })
            .await
    }

    /// 整批交給後端新增，單筆失敗只計數不中斷
    pub async fn import_keywords(&self, industry_id: &str, text: &str) -> Result<BulkImportReport> {
        let industry_id = require_text(industry_id, "Industry ID is required")?;
        let keywords = parse_bulk_keywords(text);
        if keywords.is_empty() {
            return Err(BrandError::validation("No valid keywords to import"));
        }

        let batch: Vec<NewKeyword> = keywords
            .iter()
            .map(|keyword| NewKeyword {
                industry_id: industry_id.to_string(),
                keyword: keyword.clone(),
            })
            .collect();

        let mut report = BulkImportReport::default();
        match self.catalog.create_keywords(batch).await {
            Ok(outcomes) => {
                for (keyword, outcome) in keywords.iter().zip(outcomes) {
                    match outcome {
                        Ok(_) => report.added += 1,
                        Err(e) => {
                            tracing::warn!("Failed to add keyword '{}': {}", keyword, e);
                            report.failed += 1;
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Failed to import {} keywords: {}", keywords.len(), e);
                report.failed = keywords.len();
            }
        }

        tracing::info!(
            "Imported {} keywords into {} ({} failed)",
            report.added,
            industry_id,
            report.failed
        );
        Ok(report)
    }

    pub async fn delete_keyword(&self, id: &str) -> Result<()> {
        let id = require_text(id, "Keyword ID is required")?;
        self.catalog.delete_keyword(id).await
    }

    /// 取得產業關鍵字後生成名稱，並寫入前 `audit_limit` 筆稽核紀錄
    pub async fn generate<R: Rng + Send + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GenerationResponse> {
        let industry_id = require_text(
            &request.industry_id,
            "Industry ID and word length are required",
        )?;
        let separator = request.effective_separator();
        let prefix = request.prefix.as_deref().map(str::trim).unwrap_or("");

        let keywords: Vec<String> = self
            .catalog
            .list_keywords(industry_id)
            .await?
            .into_iter()
            .map(|row| row.keyword)
            .collect();

        if keywords.is_empty() {
            return Err(BrandError::NoKeywords {
                industry_id: industry_id.to_string(),
            });
        }

        let data = generate_names(
            &keywords,
            &request.input_text,
            request.word_count,
            prefix,
            separator,
            rng,
        );
        tracing::info!(
            "Generated {} names for industry {} from {} keywords",
            data.len(),
            industry_id,
            keywords.len()
        );

        if !data.is_empty() && self.settings.audit_limit > 0 {
            let input_text = optional_text(Some(request.input_text.as_str()));
            let prefix = optional_text(Some(prefix));
            let created_at = Some(Utc::now());
            let rows: Vec<GeneratedNameRecord> = data
                .iter()
                .take(self.settings.audit_limit)
                .map(|result| GeneratedNameRecord {
                    id: None,
                    industry_id: industry_id.to_string(),
                    generated_name: result.full_name.clone(),
                    input_text: input_text.clone(),
                    prefix: prefix.clone(),
                    word_length: Some(request.word_count),
                    created_at,
                })
                .collect();

            // 稽核失敗不影響回應
            if let Err(e) = self.log.record(rows).await {
                tracing::warn!("Failed to record generated names: {}", e);
            }
        }

        let total = data.len();
        Ok(GenerationResponse { data, total })
    }
}
