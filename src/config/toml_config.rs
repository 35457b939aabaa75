use crate::utils::error::{BrandError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔的預設路徑
pub const DEFAULT_CONFIG_FILE: &str = "brand-namer.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    #[default]
    File,
    Postgrest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    pub url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_audit_limit")]
    pub audit_limit: usize,
    pub default_prefix: Option<String>,
    /// 固定亂數種子，便於重現結果
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub verbose: bool,
}

fn default_catalog_dir() -> String {
    ".".to_string()
}

fn default_catalog_file() -> String {
    crate::adapters::file_catalog::DEFAULT_CATALOG_FILE.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_audit_limit() -> usize {
    crate::core::service::DEFAULT_AUDIT_LIMIT
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            catalog_dir: default_catalog_dir(),
            catalog_file: default_catalog_file(),
            url: None,
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            audit_limit: default_audit_limit(),
            default_prefix: None,
            seed: None,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BrandError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 設定檔存在才載入，否則使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BrandError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPABASE_ANON_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| BrandError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        match self.backend.kind {
            BackendKind::Memory => {}
            BackendKind::File => {
                validate_path("backend.catalog_dir", &self.backend.catalog_dir)?;
                validate_path("backend.catalog_file", &self.backend.catalog_file)?;
            }
            BackendKind::Postgrest => {
                let url = validate_required_field("backend.url", &self.backend.url)?;
                validate_url("backend.url", url)?;
                let api_key = validate_required_field("backend.api_key", &self.backend.api_key)?;
                validate_non_empty_string("backend.api_key", api_key)?;
                if api_key.starts_with("${") {
                    return Err(BrandError::InvalidConfigValueError {
                        field: "backend.api_key".to_string(),
                        value: api_key.clone(),
                        reason: "Environment variable is not set".to_string(),
                    });
                }
            }
        }

        validate_range("backend.timeout_seconds", self.backend.timeout_seconds, 1, 300)?;
        validate_range(
            "generator.audit_limit",
            self.generator.audit_limit,
            0,
            crate::core::generator::MAX_COMBINATIONS,
        )?;
        Ok(())
    }
}
