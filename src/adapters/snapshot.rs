use crate::domain::model::{
    BrandIndustry, BrandKeyword, GeneratedNameRecord, IndustryUpdate, NewIndustry, NewKeyword,
};
use crate::utils::error::{BrandError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 本機後端共用的目錄資料，可直接序列化為 JSON 檔
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub industries: Vec<BrandIndustry>,
    #[serde(default)]
    pub keywords: Vec<BrandKeyword>,
    #[serde(default)]
    pub generated: Vec<GeneratedNameRecord>,
}

impl CatalogSnapshot {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn industries_by_name(&self) -> Vec<BrandIndustry> {
        let mut industries = self.industries.clone();
        industries.sort_by(|a, b| a.name.cmp(&b.name));
        industries
    }

    pub fn insert_industry(&mut self, industry: NewIndustry) -> BrandIndustry {
        let row = BrandIndustry {
            id: Uuid::new_v4().to_string(),
            name: industry.name,
            description: industry.description,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.industries.push(row.clone());
        row
    }

    pub fn update_industry(&mut self, id: &str, update: IndustryUpdate) -> Result<BrandIndustry> {
        let row = self
            .industries
            .iter_mut()
            .find(|industry| industry.id == id)
            .ok_or_else(|| BrandError::not_found("Industry", id))?;

        row.name = update.name;
        row.description = update.description;
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }

    pub fn remove_industry(&mut self, id: &str) -> Result<()> {
        if !self.industries.iter().any(|industry| industry.id == id) {
            return Err(BrandError::not_found("Industry", id));
        }
        self.keywords.retain(|keyword| keyword.industry_id != id);
        self.industries.retain(|industry| industry.id != id);
        Ok(())
    }

    /// 依插入順序，即建立時間
    pub fn keywords_for(&self, industry_id: &str) -> Vec<BrandKeyword> {
        self.keywords
            .iter()
            .filter(|keyword| keyword.industry_id == industry_id)
            .cloned()
            .collect()
    }

    pub fn insert_keyword(&mut self, keyword: NewKeyword) -> Result<BrandKeyword> {
        if !self
            .industries
            .iter()
            .any(|industry| industry.id == keyword.industry_id)
        {
            return Err(BrandError::not_found("Industry", &keyword.industry_id));
        }

        let row = BrandKeyword {
            id: Uuid::new_v4().to_string(),
            industry_id: keyword.industry_id,
            keyword: keyword.keyword,
            created_at: Some(Utc::now()),
        };
        self.keywords.push(row.clone());
        Ok(row)
    }

    pub fn remove_keyword(&mut self, id: &str) -> Result<()> {
        let before = self.keywords.len();
        self.keywords.retain(|keyword| keyword.id != id);
        if self.keywords.len() == before {
            return Err(BrandError::not_found("Keyword", id));
        }
        Ok(())
    }

    pub fn append_generated(&mut self, rows: Vec<GeneratedNameRecord>) {
        self.generated.extend(rows.into_iter().map(|mut row| {
            if row.id.is_none() {
                row.id = Some(Uuid::new_v4().to_string());
            }
            row
        }));
    }
}
