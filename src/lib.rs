//! Stardew Valley Perfection Tracker（ネイティブ版）
//!
//! reqwestトランスポート・CLI・ターミナル表示

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod picker;
pub mod render;
