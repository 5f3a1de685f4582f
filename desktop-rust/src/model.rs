use perfection_common::{AnalyzeError, Summary, UploadTicket};

/// バックグラウンドスレッドからUIスレッドへの通知
#[derive(Debug)]
pub enum UiMessage {
    Settled {
        ticket: UploadTicket,
        outcome: Result<Summary, AnalyzeError>,
    },
}
