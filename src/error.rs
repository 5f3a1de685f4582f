use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("セーブファイルが見つかりません: {0}")]
    SaveFileNotFound(String),

    #[error("セーブファイルが選択されていません")]
    NoSaveFileSelected,

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("解析サービスが応答しません: {0}")]
    Unhealthy(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<perfection_common::Error> for TrackerError {
    fn from(err: perfection_common::Error) -> Self {
        match err {
            perfection_common::Error::Config(message) => TrackerError::Config(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
