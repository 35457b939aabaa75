use crate::domain::model::{
    BrandIndustry, BrandKeyword, GeneratedNameRecord, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::domain::ports::{CatalogRepository, GenerationLog};
use crate::utils::error::{BrandError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use url::Url;

const INDUSTRIES_TABLE: &str = "brand_industries";
const KEYWORDS_TABLE: &str = "brand_keywords";
const GENERATED_TABLE: &str = "brand_generated_names";

/// 託管資料庫的 PostgREST 介面 (`{url}/rest/v1/{table}`)
#[derive(Debug, Clone)]
pub struct PostgrestCatalog {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl PostgrestCatalog {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| BrandError::InvalidConfigValueError {
            field: "backend.url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            table
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    fn get(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.get(self.table_url(table)))
    }

    fn post(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.post(self.table_url(table)))
    }

    fn patch(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.patch(self.table_url(table)))
    }

    fn delete(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.delete(self.table_url(table)))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Backend response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!("Backend request failed with {}: {}", status, message);
        Err(BrandError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>> {
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// 插入或更新後 PostgREST 會回傳陣列，取第一筆
    async fn first_row<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        entity: &str,
        id: &str,
    ) -> Result<T> {
        self.fetch_rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| BrandError::not_found(entity, id))
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait]
impl CatalogRepository for PostgrestCatalog {
    async fn list_industries(&self) -> Result<Vec<BrandIndustry>> {
        let request = self
            .get(INDUSTRIES_TABLE)
            .query(&[("select", "*"), ("order", "name.asc")]);
        self.fetch_rows(request).await
    }

    async fn create_industry(&self, industry: NewIndustry) -> Result<BrandIndustry> {
        let body = json!([{
            "name": industry.name,
            "description": industry.description,
            "created_at": Utc::now(),
        }]);
        let request = self
            .post(INDUSTRIES_TABLE)
            .header("Prefer", "return=representation")
            .json(&body);
        self.first_row(request, "Industry", &industry.name).await
    }

    async fn update_industry(&self, id: &str, update: IndustryUpdate) -> Result<BrandIndustry> {
        let body = json!({
            "name": update.name,
            "description": update.description,
            "updated_at": Utc::now(),
        });
        let request = self
            .patch(INDUSTRIES_TABLE)
            .query(&[("id", eq(id))])
            .header("Prefer", "return=representation")
            .json(&body);
        self.first_row(request, "Industry", id).await
    }

    async fn delete_industry(&self, id: &str) -> Result<()> {
        self.send(
            self.delete(KEYWORDS_TABLE)
                .query(&[("industry_id", eq(id))]),
        )
        .await?;
        self.send(self.delete(INDUSTRIES_TABLE).query(&[("id", eq(id))]))
            .await?;
        Ok(())
    }

    async fn list_keywords(&self, industry_id: &str) -> Result<Vec<BrandKeyword>> {
        let request = self.get(KEYWORDS_TABLE).query(&[
            ("select", "*".to_string()),
            ("industry_id", eq(industry_id)),
            ("order", "created_at.asc".to_string()),
        ]);
        self.fetch_rows(request).await
    }

    async fn create_keyword(&self, keyword: NewKeyword) -> Result<BrandKeyword> {
        let body = json!([{
            "industry_id": keyword.industry_id,
            "keyword": keyword.keyword,
            "created_at": Utc::now(),
        }]);
        let request = self
            .post(KEYWORDS_TABLE)
            .header("Prefer", "return=representation")
            .json(&body);
        self.first_row(request, "Keyword", &keyword.keyword).await
    }

    async fn delete_keyword(&self, id: &str) -> Result<()> {
        self.send(self.delete(KEYWORDS_TABLE).query(&[("id", eq(id))]))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl GenerationLog for PostgrestCatalog {
    async fn record(&self, rows: Vec<GeneratedNameRecord>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let request = self
            .post(GENERATED_TABLE)
            .header("Prefer", "return=minimal")
            .json(&rows);
        self.send(request).await?;
        Ok(())
    }
}
