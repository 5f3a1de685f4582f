//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <h3>"Error"</h3>
            <p>{message}</p>
        </div>
    }
}
