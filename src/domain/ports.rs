use crate::domain::model::{
    BrandIndustry, BrandKeyword, GeneratedNameRecord, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 產業與關鍵字的資料來源
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 依名稱遞增排序
    async fn list_industries(&self) -> Result<Vec<BrandIndustry>>;
    async fn create_industry(&self, industry: NewIndustry) -> Result<BrandIndustry>;
    async fn update_industry(&self, id: &str, update: IndustryUpdate) -> Result<BrandIndustry>;
    /// 先刪除該產業的關鍵字，再刪除產業本身
    async fn delete_industry(&self, id: &str) -> Result<()>;

    /// 依建立時間遞增排序
    async fn list_keywords(&self, industry_id: &str) -> Result<Vec<BrandKeyword>>;
    async fn create_keyword(&self, keyword: NewKeyword) -> Result<BrandKeyword>;

    /// 批次新增，每筆各自回報成功或失敗；外層錯誤代表整批都沒有寫入
    async fn create_keywords(
        &self,
        keywords: Vec<NewKeyword>,
    ) -> Result<Vec<Result<BrandKeyword>>> {
        let mut outcomes = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            outcomes.push(self.create_keyword(keyword).await);
        }
        Ok(outcomes)
    }
    async fn delete_keyword(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait GenerationLog: Send + Sync {
    async fn record(&self, rows: Vec<GeneratedNameRecord>) -> Result<()>;
}
