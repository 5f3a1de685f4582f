//! 解析サービス連携（reqwest）

use log::debug;
use perfection_common::{AnalyzeTransport, Endpoint, RawResponse};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, TrackerError};

/// 送信するセーブファイル
#[derive(Debug, Clone)]
pub struct SaveFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SaveFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TrackerError::SaveFileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "save_file".to_string());
        Ok(Self { file_name, bytes })
    }
}

/// `/api/health` のレスポンス
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// reqwestによるトランスポート
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("perfection-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// サービスの死活確認（`{"status":"ok"}` なら成功）
    pub async fn check_health(&self, endpoint: &Endpoint) -> Result<String> {
        let url = endpoint.health_url();
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TrackerError::Unhealthy(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Unhealthy(format!("HTTP {}", status.as_u16())));
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| TrackerError::Unhealthy(error_chain(&e)))?;
        if health.status != "ok" {
            return Err(TrackerError::Unhealthy(format!("status: {}", health.status)));
        }
        Ok(health.status)
    }
}

impl AnalyzeTransport for ReqwestTransport {
    type File = SaveFile;

    async fn post_file(&self, url: &str, file: &SaveFile) -> std::result::Result<RawResponse, String> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| error_chain(&e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| error_chain(&e))?;
        Ok(RawResponse { status, body })
    }
}

/// エラーの原因をすべて連結（トランスポートの説明をそのまま表示するため）
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_chain_includes_cause() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"));
        assert_eq!(error_chain(&err), "error sending request: connection refused");
    }

    #[test]
    fn test_save_file_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("Farm_123456789");
        std::fs::write(&path, b"<SaveGame/>").unwrap();

        let save = SaveFile::load(&path).expect("読み込み失敗");
        assert_eq!(save.file_name, "Farm_123456789");
        assert_eq!(save.bytes, b"<SaveGame/>");
    }

    #[test]
    fn test_save_file_missing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let result = SaveFile::load(&dir.path().join("missing"));
        assert!(matches!(result, Err(TrackerError::SaveFileNotFound(_))));

        // ディレクトリはファイルとして扱わない
        let result = SaveFile::load(dir.path());
        assert!(matches!(result, Err(TrackerError::SaveFileNotFound(_))));
    }
}
