//! アップロードの状態遷移
//!
//! `Idle --submit--> Uploading --成功--> Succeeded` /
//! `Uploading --失敗--> Failed`。Succeeded・Failedからは次のsubmitで
//! 再びUploadingへ。送信中のsubmitは無視する（同時に1リクエストまで）。

use log::{debug, warn};

use crate::endpoint::Endpoint;
use crate::error::{AnalyzeError, GENERIC_FAILURE};
use crate::types::Summary;

/// アップロードの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Succeeded(Summary),
    Failed(String),
}

impl UploadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Uploading => "uploading",
            UploadState::Succeeded(_) => "succeeded",
            UploadState::Failed(_) => "failed",
        }
    }
}

/// `begin` が発行する送信中リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// HTTPの生レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// フロントエンドごとのHTTP実装
///
/// `file` をmultipartの `file` パートとして `url` へPOSTする。
/// 応答が得られなかった場合はトランスポート自身の説明文を返す。
#[allow(async_fn_in_trait)]
pub trait AnalyzeTransport {
    type File;

    async fn post_file(&self, url: &str, file: &Self::File) -> Result<RawResponse, String>;
}

/// レスポンスをSummaryまたはエラーに変換
pub fn interpret_response(raw: &RawResponse) -> Result<Summary, AnalyzeError> {
    if !raw.is_success() {
        let message = serde_json::from_str::<serde_json::Value>(&raw.body)
            .ok()
            .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(AnalyzeError::Http { status: raw.status, message });
    }

    let value: serde_json::Value =
        serde_json::from_str(&raw.body).map_err(|e| AnalyzeError::Parse(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| AnalyzeError::MalformedSummary(e.to_string()))
}

/// セーブファイルを解析サービスへ送信
pub async fn analyze<T: AnalyzeTransport>(
    transport: &T,
    endpoint: &Endpoint,
    file: &T::File,
) -> Result<Summary, AnalyzeError> {
    let url = endpoint.analyze_url();
    debug!("POST {url}");

    let raw = transport
        .post_file(&url, file)
        .await
        .map_err(AnalyzeError::Transport)?;
    debug!("response {} ({} bytes)", raw.status, raw.body.len());

    interpret_response(&raw)
}

/// UploadStateの唯一の保持者
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    state: UploadState,
    generation: u64,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading)
    }

    pub fn summary(&self) -> Option<&Summary> {
        match &self.state {
            UploadState::Succeeded(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UploadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Uploadingへ遷移し、前回の結果・エラーを破棄する
    ///
    /// 送信中なら何もせず `None`。
    pub fn begin(&mut self) -> Option<UploadTicket> {
        if self.is_uploading() {
            warn!("upload already in flight; submit ignored");
            return None;
        }
        self.generation += 1;
        self.state = UploadState::Uploading;
        Some(UploadTicket(self.generation))
    }

    /// 送信結果を反映し、Uploadingを解除する
    ///
    /// 現在のリクエスト以外のチケットは無視して `false` を返す。
    pub fn settle(&mut self, ticket: UploadTicket, outcome: Result<Summary, AnalyzeError>) -> bool {
        if ticket.0 != self.generation || !self.is_uploading() {
            debug!("stale upload result ignored");
            return false;
        }
        self.state = match outcome {
            Ok(summary) => {
                debug!("upload succeeded");
                UploadState::Succeeded(summary)
            }
            Err(err) => {
                debug!("upload failed: {err}");
                UploadState::Failed(err.user_message())
            }
        };
        true
    }

    /// begin → analyze → settle を一続きで実行
    ///
    /// 送信中に呼ばれた場合は通信せずに現在の状態を返す。
    pub async fn submit<T: AnalyzeTransport>(
        &mut self,
        transport: &T,
        endpoint: &Endpoint,
        file: &T::File,
    ) -> &UploadState {
        if let Some(ticket) = self.begin() {
            let outcome = analyze(transport, endpoint, file).await;
            self.settle(ticket, outcome);
        }
        &self.state
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    pub(crate) const SURVIVAL_BURGER: &str = r#"{
        "fish": {"total": 100, "caught": 100, "uncaught": 0, "missingList": []},
        "recipes": {
            "total": 80, "learned": 75, "cooked": 70, "missingToCook": 5,
            "missingList": [{
                "name": "Survival Burger",
                "needToLearn": false,
                "ingredients": [
                    {"name": "Eel", "quantity": 1},
                    {"name": "Cave Carrot", "quantity": 1}
                ]
            }]
        }
    }"#;

    /// 固定レスポンスを返し、呼び出し回数を数える
    pub(crate) struct FakeTransport {
        pub(crate) response: Result<RawResponse, String>,
        pub(crate) calls: Cell<usize>,
    }

    impl FakeTransport {
        pub(crate) fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse { status, body: body.to_string() }),
                calls: Cell::new(0),
            }
        }

        pub(crate) fn unreachable(message: &str) -> Self {
            Self { response: Err(message.to_string()), calls: Cell::new(0) }
        }
    }

    impl AnalyzeTransport for FakeTransport {
        type File = Vec<u8>;

        async fn post_file(&self, _url: &str, _file: &Vec<u8>) -> Result<RawResponse, String> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn run(transport: &FakeTransport) -> UploadController {
        let mut controller = UploadController::new();
        block_on(controller.submit(transport, &Endpoint::default(), &b"save".to_vec()));
        controller
    }

    #[test]
    fn test_success_transitions_to_succeeded() {
        let transport = FakeTransport::responding(200, SURVIVAL_BURGER);
        let controller = run(&transport);

        assert!(matches!(controller.state(), UploadState::Succeeded(_)));
        assert!(controller.error_message().is_none());
        assert_eq!(controller.summary().unwrap().recipes.cooked, 70);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_server_error_field_is_shown() {
        let transport = FakeTransport::responding(500, r#"{"error":"bad save file"}"#);
        let controller = run(&transport);

        assert_eq!(controller.error_message(), Some("bad save file"));
        assert!(!controller.is_uploading());
    }

    #[test]
    fn test_server_error_without_message_is_generic() {
        let transport = FakeTransport::responding(400, r#"{"status":"nope"}"#);
        assert_eq!(run(&transport).error_message(), Some(GENERIC_FAILURE));

        let transport = FakeTransport::responding(502, "<html>Bad Gateway</html>");
        assert_eq!(run(&transport).error_message(), Some(GENERIC_FAILURE));

        let transport = FakeTransport::responding(500, r#"{"error":""}"#);
        assert_eq!(run(&transport).error_message(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_transport_failure_is_verbatim() {
        let transport = FakeTransport::unreachable("error sending request: connection refused");
        let controller = run(&transport);

        assert_eq!(
            controller.error_message(),
            Some("error sending request: connection refused")
        );
        assert!(!controller.is_uploading());
    }

    #[test]
    fn test_success_body_not_json_is_generic() {
        let transport = FakeTransport::responding(200, "not json");
        assert_eq!(run(&transport).error_message(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn test_malformed_summary_fails() {
        let transport = FakeTransport::responding(200, r#"{"fish": {}}"#);
        let message = run(&transport).error_message().unwrap().to_string();
        assert!(message.starts_with("Failed to analyze file: unexpected response"));
    }

    #[test]
    fn test_begin_is_uploading_before_network() {
        let transport = FakeTransport::responding(200, SURVIVAL_BURGER);
        let mut controller = UploadController::new();

        let ticket = controller.begin().expect("idleから開始できる");
        assert_eq!(controller.state(), &UploadState::Uploading);
        assert_eq!(transport.calls.get(), 0);

        let outcome = block_on(analyze(&transport, &Endpoint::default(), &Vec::new()));
        assert!(controller.settle(ticket, outcome));
        assert_eq!(controller.state().as_str(), "succeeded");
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let transport = FakeTransport::responding(500, r#"{"error":"bad save file"}"#);
        let mut controller = run(&transport);
        assert!(controller.error_message().is_some());

        controller.begin().unwrap();
        assert!(controller.error_message().is_none());
        assert!(controller.summary().is_none());
    }

    #[test]
    fn test_submit_while_uploading_is_ignored() {
        let transport = FakeTransport::responding(200, SURVIVAL_BURGER);
        let mut controller = UploadController::new();
        let first = controller.begin().unwrap();

        assert!(controller.begin().is_none());
        block_on(controller.submit(&transport, &Endpoint::default(), &Vec::new()));
        assert_eq!(transport.calls.get(), 0);
        assert!(controller.is_uploading());

        assert!(controller.settle(first, Err(AnalyzeError::Transport("reset".into()))));
        assert_eq!(controller.error_message(), Some("reset"));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut controller = UploadController::new();
        let old = controller.begin().unwrap();
        assert!(controller.settle(old, Err(AnalyzeError::Transport("timeout".into()))));

        let _current = controller.begin().unwrap();
        assert!(!controller.settle(old, Err(AnalyzeError::Transport("late".into()))));
        assert!(controller.is_uploading());
    }

    #[test]
    fn test_failed_then_succeeded() {
        let mut controller = UploadController::new();
        let bad = FakeTransport::unreachable("offline");
        block_on(controller.submit(&bad, &Endpoint::default(), &Vec::new()));
        assert_eq!(controller.state(), &UploadState::Failed("offline".into()));

        let good = FakeTransport::responding(200, SURVIVAL_BURGER);
        block_on(controller.submit(&good, &Endpoint::default(), &Vec::new()));
        assert!(controller.summary().is_some());
    }
}
