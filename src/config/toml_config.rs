use crate::domain::model::User;
use crate::utils::error::{Result, SnippetError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnippetConfig {
    pub user: Option<User>,
}

impl SnippetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SnippetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 未指定 [user] 時使用預設紀錄
    pub fn user(&self) -> User {
        self.user.clone().unwrap_or_default()
    }
}

impl Validate for SnippetConfig {
    fn validate(&self) -> Result<()> {
        if let Some(user) = &self.user {
            validate_non_empty_string("user.name", &user.name)?;
            validate_non_empty_string("user.email", &user.email)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_user_table() {
        let toml_content = r#"
[user]
name = "Mia"
age = 10
email = "mia@example.com"
"#;

        let config = SnippetConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.user(), User::new("Mia", 10, "mia@example.com"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_default_user() {
        let config = SnippetConfig::from_toml_str("").unwrap();
        assert_eq!(config.user, None);
        assert_eq!(config.user(), User::default());
    }

    #[test]
    fn test_missing_field_is_config_error() {
        let toml_content = r#"
[user]
name = "Mia"
age = 10
"#;

        let err = SnippetConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, SnippetError::ConfigError { .. }));
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let toml_content = r#"
[user]
name = "  "
age = 40
email = "someone@example.com"
"#;

        let config = SnippetConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[user]\nname = \"Lee\"\nage = 18\nemail = \"lee@example.com\"").unwrap();

        let config = SnippetConfig::from_file(file.path()).unwrap();
        assert_eq!(config.user().age, 18);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = SnippetConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SnippetError::IoError(_)));
    }
}
