use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 組合名稱時使用的關鍵字數量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WordCount {
    Two,
    Three,
}

impl WordCount {
    pub fn arity(self) -> usize {
        match self {
            WordCount::Two => 2,
            WordCount::Three => 3,
        }
    }

    /// 未指定分隔符號時的預設值：兩個字直接連接，三個字用空格
    pub fn default_separator(self) -> &'static str {
        match self {
            WordCount::Two => "",
            WordCount::Three => " ",
        }
    }
}

impl TryFrom<u8> for WordCount {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            2 => Ok(WordCount::Two),
            3 => Ok(WordCount::Three),
            other => Err(format!("word count must be 2 or 3, got {}", other)),
        }
    }
}

impl From<WordCount> for u8 {
    fn from(value: WordCount) -> Self {
        value.arity() as u8
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arity())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandIndustry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandKeyword {
    pub id: String,
    pub industry_id: String,
    pub keyword: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIndustry {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryUpdate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKeyword {
    pub industry_id: String,
    pub keyword: String,
}

/// 生成結果的稽核紀錄，只寫入不回讀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub industry_id: String,
    pub generated_name: String,
    pub input_text: Option<String>,
    pub prefix: Option<String>,
    pub word_length: Option<WordCount>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "industryId")]
    pub industry_id: String,
    #[serde(rename = "inputText", default)]
    pub input_text: String,
    #[serde(rename = "wordLength")]
    pub word_count: WordCount,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub separator: Option<String>,
}

impl GenerationRequest {
    pub fn new(industry_id: impl Into<String>, word_count: WordCount) -> Self {
        Self {
            industry_id: industry_id.into(),
            input_text: String::new(),
            word_count,
            prefix: None,
            separator: None,
        }
    }

    pub fn with_input_text(mut self, text: impl Into<String>) -> Self {
        self.input_text = text.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// 實際使用的分隔符號
    pub fn effective_separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.word_count.default_separator())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedResult {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub data: Vec<GeneratedResult>,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkImportReport {
    pub added: usize,
    pub failed: usize,
}
