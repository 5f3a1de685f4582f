//! エラー型定義

use thiserror::Error;

/// サーバーが `error` を返さなかった場合の汎用メッセージ
pub const GENERIC_FAILURE: &str = "Failed to analyze file";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 解析リクエストの失敗
///
/// どの種類も最終的には [`AnalyzeError::user_message`] で
/// 画面のエラー欄に出す1つの文字列になる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// 応答なし（接続失敗・DNS・切断）
    #[error("{0}")]
    Transport(String),

    /// 2xx以外の応答
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 2xx応答だがJSONではない
    #[error("response is not valid JSON: {0}")]
    Parse(String),

    /// JSONだがSummaryの形をしていない
    #[error("unexpected response: {0}")]
    MalformedSummary(String),
}

impl AnalyzeError {
    /// エラー欄に表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::Transport(message) => message.clone(),
            AnalyzeError::Http { message, .. } => message.clone(),
            AnalyzeError::Parse(_) => GENERIC_FAILURE.to_string(),
            AnalyzeError::MalformedSummary(detail) => {
                format!("{GENERIC_FAILURE}: unexpected response ({detail})")
            }
        }
    }
}
