use crate::error::{Result, TrackerError};
use log::debug;
use perfection_common::{Endpoint, BASE_URL_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrackerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("perfection-tracker").join("config.json"))
    }

    /// 接続先を決定
    ///
    /// 優先順位: `--base-url` > 環境変数 > 設定ファイル > 既定値
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<Endpoint> {
        let env = std::env::var(BASE_URL_ENV).ok();
        self.resolve_endpoint_with(flag, env.as_deref())
    }

    pub fn resolve_endpoint_with(&self, flag: Option<&str>, env: Option<&str>) -> Result<Endpoint> {
        let configured = flag
            .or(env.filter(|v| !v.trim().is_empty()))
            .or(self.base_url.as_deref());

        let endpoint = match configured {
            Some(url) => Endpoint::new(url)?,
            None => Endpoint::default(),
        };
        debug!("endpoint: {}", endpoint.base_url());
        Ok(endpoint)
    }

    /// 検証してから保存
    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let endpoint = Endpoint::new(&url)?;
        self.base_url = Some(endpoint.base_url().to_string());
        self.save()
    }
}
