//! ヘッダーコンポーネント

use leptos::prelude::*;
use perfection_common::view::{APP_TAGLINE, APP_TITLE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>{APP_TITLE}</h1>
            <p>{APP_TAGLINE}</p>
        </header>
    }
}
