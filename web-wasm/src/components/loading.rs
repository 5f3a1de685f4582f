//! 解析中表示コンポーネント

use leptos::prelude::*;
use perfection_common::view::LOADING_MESSAGE;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <p>{LOADING_MESSAGE}</p>
        </div>
    }
}
