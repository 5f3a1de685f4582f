//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use stardew_perfection::client::SaveFile;
use stardew_perfection::config::Config;
use stardew_perfection::error::TrackerError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないセーブファイル
#[test]
fn test_load_nonexistent_save_file() {
    let result = SaveFile::load(Path::new("/nonexistent/path/Farm_12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, TrackerError::SaveFileNotFound(_)));
}

/// 空のセーブファイルもそのまま送る（検証はサーバー側）
#[test]
fn test_load_empty_save_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("Farm_1");
    std::fs::write(&path, b"").unwrap();

    let save = SaveFile::load(&path).expect("空ファイルも読み込める");
    assert!(save.bytes.is_empty());
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ base_url: ").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(TrackerError::JsonParse(_))));
}

/// 不正なベースURL
#[test]
fn test_invalid_base_url() {
    let result = Config::default().resolve_endpoint_with(Some("ftp://example.com"), None);
    assert!(matches!(result, Err(TrackerError::Config(_))));
}

/// TrackerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        TrackerError::Config("テスト設定エラー".to_string()),
        TrackerError::SaveFileNotFound("Farm_1".to_string()),
        TrackerError::NoSaveFileSelected,
        TrackerError::Unhealthy("HTTP 503".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// 解析失敗はサーバーのメッセージだけを表示
#[test]
fn test_analysis_failed_display_is_message_only() {
    let err = TrackerError::AnalysisFailed("bad save file".to_string());
    assert_eq!(format!("{}", err), "bad save file");
}
