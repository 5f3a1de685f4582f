//! 解析サービスの接続先

use crate::error::{Error, Result};

/// 既定の解析サービス
pub const DEFAULT_BASE_URL: &str = "https://stardew-valley-perfection-tracker.onrender.com";

/// 接続先を上書きする環境変数
pub const BASE_URL_ENV: &str = "PERFECTION_API_URL";

/// 検証済みのベースURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// ベースURLを検証して作成（末尾の `/` は除去）
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("base URL is empty".into()));
        }
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| {
                Error::Config(format!("base URL must start with http:// or https://: {trimmed}"))
            })?;
        if rest.is_empty() {
            return Err(Error::Config(format!("base URL has no host: {trimmed}")));
        }
        Ok(Self { base_url: trimmed.to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}
