use crate::adapters::snapshot::CatalogSnapshot;
use crate::domain::model::{
    BrandIndustry, BrandKeyword, GeneratedNameRecord, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::domain::ports::{CatalogRepository, GenerationLog};
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// 僅存在於記憶體的目錄，適合測試與一次性執行
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogSnapshot>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn generated(&self) -> Vec<GeneratedNameRecord> {
        self.state.read().await.generated.clone()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_industries(&self) -> Result<Vec<BrandIndustry>> {
        Ok(self.state.read().await.industries_by_name())
    }

    async fn create_industry(&self, industry: NewIndustry) -> Result<BrandIndustry> {
        Ok(self.state.write().await.insert_industry(industry))
    }

    async fn update_industry(&self, id: &str, update: IndustryUpdate) -> Result<BrandIndustry> {
        self.state.write().await.update_industry(id, update)
    }

    async fn delete_industry(&self, id: &str) -> Result<()> {
        self.state.write().await.remove_industry(id)
    }

    async fn list_keywords(&self, industry_id: &str) -> Result<Vec<BrandKeyword>> {
        Ok(self.state.read().await.keywords_for(industry_id))
    }

    async fn create_keyword(&self, keyword: NewKeyword) -> Result<BrandKeyword> {
        self.state.write().await.insert_keyword(keyword)
    }

    async fn delete_keyword(&self, id: &str) -> Result<()> {
        self.state.write().await.remove_keyword(id)
    }
}

#[async_trait]
impl GenerationLog for InMemoryCatalog {
    async fn record(&self, rows: Vec<GeneratedNameRecord>) -> Result<()> {
        self.state.write().await.append_generated(rows);
        Ok(())
    }
}
