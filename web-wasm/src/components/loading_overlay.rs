//! 読み込み中表示コンポーネント

use leptos::prelude::*;

/// 表の上に重ねて操作を塞ぐ
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="spinner" />
            <p class="loading-text">"Loading..."</p>
        </div>
    }
}
