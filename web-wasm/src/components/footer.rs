//! フッターコンポーネント（セーブファイルの場所）

use leptos::prelude::*;
use perfection_common::view::SAVE_LOCATIONS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="App-footer">
            <p>"Save file location: Your Stardew Valley saves are typically in:"</p>
            <ul>
                {SAVE_LOCATIONS
                    .iter()
                    .map(|(os, path)| view! { <li>{format!("{}: {}", os, path)}</li> })
                    .collect_view()}
            </ul>
        </footer>
    }
}
