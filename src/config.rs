use crate::error::{Result, SheetMatchError};
use serde::{Deserialize, Serialize};
use sheet_match_common::DuplicateColumnPolicy;
use std::path::PathBuf;

const HOST_ENV: &str = "SHEET_MATCH_HOST";
const PORT_ENV: &str = "SHEET_MATCH_PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// アップロード上限（MiB、2ファイル合計）
    pub max_upload_mb: usize,
    pub duplicate_columns: DuplicateColumnPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// 設定ファイル + 環境変数
    pub fn load() -> Result<Self> {
        Self::load_file()?.with_env_overrides()
    }

    /// 設定ファイルのみ（無ければデフォルト）
    pub fn load_file() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SheetMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sheet-match").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            max_upload_mb: 50,
            duplicate_columns: DuplicateColumnPolicy::Reject,
        }
    }

    /// 環境変数を優先
    fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.host = host;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.port = port
                .parse()
                .map_err(|_| SheetMatchError::Config(format!("{}が不正です: {}", PORT_ENV, port)))?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
