use crate::utils::error::{OrderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub invoice: InvoiceConfig,
    #[serde(default)]
    pub order: OrderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub data_dir: Option<String>,
    pub drivers: Option<String>,
    pub invoice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceConfig {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| OrderError::FileAccessError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[files]
data_dir = "./data"
drivers = "roster.txt"
invoice = "out/invoice.txt"

[invoice]
currency = "ZAR "

[order]
seed = 7
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.files.data_dir.as_deref(), Some("./data"));
        assert_eq!(config.files.drivers.as_deref(), Some("roster.txt"));
        assert_eq!(config.files.invoice.as_deref(), Some("out/invoice.txt"));
        assert_eq!(config.invoice.currency.as_deref(), Some("ZAR "));
        assert_eq!(config.order.seed, Some(7));
    }

    #[test]
    fn test_empty_toml_uses_no_overrides() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.files.drivers.is_none());
        assert!(config.order.seed.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FOOD_QUICK_TEST_DATA_DIR", "/srv/food-quick");

        let toml_content = r#"
[files]
data_dir = "${FOOD_QUICK_TEST_DATA_DIR}"
drivers = "${FOOD_QUICK_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.files.data_dir.as_deref(), Some("/srv/food-quick"));
        assert_eq!(
            config.files.drivers.as_deref(),
            Some("${FOOD_QUICK_TEST_UNSET_VAR}")
        );

        std::env::remove_var("FOOD_QUICK_TEST_DATA_DIR");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[order]\nseed = \"many\"").unwrap_err();
        assert!(matches!(err, OrderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[files]\ndrivers = \"fleet.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.files.drivers.as_deref(), Some("fleet.txt"));
    }
}
