//! 解析サービス連携（ブラウザfetch）
//!
//! セーブファイルを `file` パート1つのmultipartとしてPOSTする。

use gloo::net::http::Request;
use perfection_common::{AnalyzeTransport, RawResponse};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// `fetch` によるトランスポート
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl AnalyzeTransport for FetchTransport {
    type File = File;

    async fn post_file(&self, url: &str, file: &File) -> Result<RawResponse, String> {
        let form = build_form(file).map_err(js_error_message)?;

        let response = Request::post(url)
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(RawResponse { status, body })
    }
}

/// multipartボディを作成
pub fn build_form(file: &File) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;
    Ok(form)
}

/// JS例外を表示用の文字列へ
fn js_error_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_form_has_single_file_part() {
        let parts = js_sys::Array::of1(&JsValue::from_str("<SaveGame/>"));
        let file = File::new_with_str_sequence(&parts, "Farm_123456789").unwrap();

        let form = build_form(&file).unwrap();
        assert!(form.has("file"));
        assert_eq!(form.get_all("file").length(), 1);
    }
}
