//! ファイル選択コンポーネント
//!
//! 非表示の `<input type="file">` をボタンから開く。1ファイルのみ、形式の制限なし。

use leptos::html;
use leptos::prelude::*;
use perfection_common::view::picker_label;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn FilePicker<F>(
    uploading: Signal<bool>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let input_ref = NodeRef::<html::Input>::new();

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            // 同じファイルを続けて選んでもchangeが発火するように戻す
            input.set_value("");
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    let on_click = move |_| {
        if uploading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="file-upload">
            <input
                type="file"
                node_ref=input_ref
                style="display: none"
                disabled=move || uploading.get()
                on:change=on_change
            />
            <button
                class="upload-button"
                disabled=move || uploading.get()
                on:click=on_click
            >
                {move || picker_label(uploading.get())}
            </button>
        </div>
    }
}
