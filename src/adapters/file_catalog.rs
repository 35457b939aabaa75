use crate::adapters::snapshot::CatalogSnapshot;
use crate::domain::model::{
    BrandIndustry, BrandKeyword, GeneratedNameRecord, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::domain::ports::{CatalogRepository, GenerationLog, Storage};
use crate::utils::error::{BrandError, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

pub const DEFAULT_CATALOG_FILE: &str = "brand-catalog.json";

/// 以 JSON 檔保存的目錄，每次變更後整份重寫
pub struct FileCatalog<S: Storage> {
    storage: S,
    file_name: String,
    state: Mutex<CatalogSnapshot>,
}

impl<S: Storage> FileCatalog<S> {
    /// 載入目錄檔；檔案不存在時從空目錄開始
    pub async fn open(storage: S, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();
        let snapshot = match storage.read_file(&file_name).await {
            Ok(bytes) => CatalogSnapshot::from_json(&bytes)?,
            Err(BrandError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Catalog file {} not found, starting empty", file_name);
                CatalogSnapshot::default()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            industries = snapshot.industries.len(),
            keywords = snapshot.keywords.len(),
            "Loaded catalog from {}",
            file_name
        );

        Ok(Self {
            storage,
            file_name,
            state: Mutex::new(snapshot),
        })
    }

    async fn persist(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        let bytes = snapshot.to_json()?;
        self.storage.write_file(&self.file_name, &bytes).await?;
        tracing::debug!("Catalog written to {} ({} bytes)", self.file_name, bytes.len());
        Ok(())
    }

    /// 在鎖內套用變更並寫回檔案；寫入失敗時記憶體狀態不變
    async fn mutate<T>(&self, apply: impl FnOnce(&mut CatalogSnapshot) -> Result<T> + Send) -> Result<T> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let value = apply(&mut next)?;
        self.persist(&next).await?;
        *state = next;
        Ok(value)
    }
}

#[async_trait]
impl<S: Storage + 'static> CatalogRepository for FileCatalog<S> {
    async fn list_industries(&self) -> Result<Vec<BrandIndustry>> {
        Ok(self.state.lock().await.industries_by_name())
    }

    async fn create_industry(&self, industry: NewIndustry) -> Result<BrandIndustry> {
        self.mutate(|snapshot| Ok(snapshot.insert_industry(industry)))
            .await
    }

    async fn update_industry(&self, id: &str, update: IndustryUpdate) -> Result<BrandIndustry> {
        self.mutate(|snapshot| snapshot.update_industry(id, update))
            .await
    }

    async fn delete_industry(&self, id: &str) -> Result<()> {
        self.mutate(|snapshot| snapshot.remove_industry(id)).await
    }

    async fn list_keywords(&self, industry_id: &str) -> Result<Vec<BrandKeyword>> {
        Ok(self.state.lock().await.keywords_for(industry_id))
    }

    async fn create_keyword(&self, keyword: NewKeyword) -> Result<BrandKeyword> {
        self.mutate(|snapshot| snapshot.insert_keyword(keyword))
            .await
    }

    /// 整批套用後只寫一次檔案
    async fn create_keywords(
        &self,
        keywords: Vec<NewKeyword>,
    ) -> Result<Vec<Result<BrandKeyword>>> {
        self.mutate(|snapshot| {
            Ok(keywords
                .into_iter()
                .map(|keyword| snapshot.insert_keyword(keyword))
                .collect())
        })
        .await
    }

    async fn delete_keyword(&self, id: &str) -> Result<()> {
        self.mutate(|snapshot| snapshot.remove_keyword(id)).await
    }
}

#[async_trait]
impl<S: Storage + 'static> GenerationLog for FileCatalog<S> {
    async fn record(&self, rows: Vec<GeneratedNameRecord>) -> Result<()> {
        self.mutate(|snapshot| {
            snapshot.append_generated(rows);
            Ok(())
        })
        .await
    }
}
