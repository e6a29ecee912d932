pub mod toml_config;

pub use toml_config::SnippetConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "snippet-basics")]
#[command(about = "Classify a user record and double a fixed sequence")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with an optional [user] table")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write the JSON exports to stderr")]
    pub exports: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 有指定設定檔就載入並驗證，否則使用預設值
    pub fn load_snippet_config(&self) -> crate::utils::error::Result<SnippetConfig> {
        use crate::utils::validation::Validate;

        let config = match &self.config {
            Some(path) => SnippetConfig::from_file(path)?,
            None => SnippetConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}
