//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use perfection_common::{analyze, Endpoint, UploadController};
use web_sys::File;

use crate::api::FetchTransport;
use crate::components::{
    error_message::ErrorMessage,
    file_picker::FilePicker,
    footer::Footer,
    header::Header,
    loading::Loading,
    results::Results,
};
use crate::config::{resolve_endpoint, BUILD_BASE_URL};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let endpoint = resolve_endpoint(BUILD_BASE_URL).unwrap_or_else(|e| {
        gloo::console::warn!(format!("{}; using default endpoint", e));
        Endpoint::default()
    });
    provide_context(endpoint);

    view! {
        <div class="App">
            <Header />
            <main class="App-main">
                <UploadPanel />
            </main>
            <Footer />
        </div>
    }
}

/// アップロード状態の保持と結果表示
#[component]
fn UploadPanel() -> impl IntoView {
    let endpoint = expect_context::<Endpoint>();
    let (controller, set_controller) = signal(UploadController::new());

    let uploading = Signal::derive(move || controller.with(|c| c.is_uploading()));

    let on_file = move |file: File| {
        let mut ticket = None;
        set_controller.update(|c| ticket = c.begin());
        let Some(ticket) = ticket else {
            return;
        };

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let outcome = analyze(&FetchTransport, &endpoint, &file).await;
            if let Err(e) = &outcome {
                gloo::console::error!(format!("analyze failed: {}", e));
            }
            set_controller.update(|c| {
                c.settle(ticket, outcome);
            });
        });
    };

    view! {
        <FilePicker uploading=uploading on_file=on_file />

        {move || controller.with(|c| c.error_message().map(str::to_string)).map(|message| {
            view! { <ErrorMessage message=message /> }
        })}

        <Show when=move || uploading.get()>
            <Loading />
        </Show>

        {move || controller.with(|c| c.summary().cloned()).map(|summary| {
            view! { <Results summary=summary /> }
        })}
    }
}
