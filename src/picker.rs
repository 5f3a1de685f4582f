//! 対話式のセーブファイル選択

use dialoguer::Input;
use std::path::PathBuf;

use crate::error::{Result, TrackerError};
use crate::render::render_save_locations;

/// セーブファイルのパスを1つ入力させる
pub fn prompt_save_path() -> Result<PathBuf> {
    eprintln!("{}", render_save_locations());

    let input: String = Input::new()
        .with_prompt("セーブファイルのパス")
        .allow_empty(true)
        .interact_text()?;

    parse_save_path(&input).ok_or(TrackerError::NoSaveFileSelected)
}

/// 入力を整形（前後の空白・引用符を除去し、`~/` を展開）
pub fn parse_save_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(trimmed))
}
