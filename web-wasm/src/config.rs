//! ビルド時に埋め込む接続先

use perfection_common::{Endpoint, Result};

/// `PERFECTION_API_URL` をビルド時に指定すると既定の接続先を上書きできる
pub const BUILD_BASE_URL: Option<&str> = option_env!("PERFECTION_API_URL");

/// 接続先を決定（未指定なら既定のサービス）
pub fn resolve_endpoint(configured: Option<&str>) -> Result<Endpoint> {
    match configured {
        Some(url) => Endpoint::new(url),
        None => Ok(Endpoint::default()),
    }
}
