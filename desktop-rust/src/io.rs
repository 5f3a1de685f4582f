use anyhow::{Context, Result};
use perfection_common::{analyze, AnalyzeError, Endpoint, Summary, UploadTicket};
use stardew_perfection::client::{ReqwestTransport, SaveFile};
use stardew_perfection::config::Config;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use crate::model::UiMessage;

/// CLIと同じ設定ファイル・環境変数から接続先を決める
pub fn resolve_endpoint() -> Endpoint {
    match Config::load().and_then(|config| config.resolve_endpoint(None)) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            log::warn!("{err}; using default endpoint");
            Endpoint::default()
        }
    }
}

pub fn load_save_file(path: &Path) -> Result<SaveFile> {
    SaveFile::load(path).with_context(|| format!("read {}", path.display()))
}

/// 別スレッドで送信し、結果をチャネルで返す
pub fn spawn_upload(
    endpoint: Endpoint,
    path: PathBuf,
    ticket: UploadTicket,
    ctx: egui::Context,
) -> Receiver<UiMessage> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let outcome = upload_blocking(&endpoint, &path);
        let _ = tx.send(UiMessage::Settled { ticket, outcome });
        ctx.request_repaint();
    });
    rx
}

fn upload_blocking(endpoint: &Endpoint, path: &Path) -> Result<Summary, AnalyzeError> {
    let save = load_save_file(path).map_err(|e| AnalyzeError::Transport(format!("{e:#}")))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AnalyzeError::Transport(e.to_string()))?;
    let transport = ReqwestTransport::new().map_err(|e| AnalyzeError::Transport(e.to_string()))?;

    runtime.block_on(analyze(&transport, endpoint, &save))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_save_file_has_context() {
        let err = load_save_file(Path::new("/nonexistent/Farm_1")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("read /nonexistent/Farm_1"));
    }

    #[test]
    fn test_upload_missing_file_fails_without_network() {
        let outcome = upload_blocking(&Endpoint::default(), Path::new("/nonexistent/Farm_1"));
        assert!(matches!(outcome, Err(AnalyzeError::Transport(_))));
    }
}
