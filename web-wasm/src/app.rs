//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use artwork_browser_common::{ArtworkBrowser, BrowserConfig, BrowserEvent};
use crate::api::artic::fetch_artworks;
use crate::components::{
    artwork_table::ArtworkTable,
    header::Header,
    paginator::Paginator,
};
use crate::session_store::BrowserSessionStore;

type Browser = ArtworkBrowser<BrowserSessionStore>;

/// イベントを状態に適用し、必要ならリクエストを発行する
///
/// 完了は`FetchSettled`として再びここに戻る。
fn dispatch(browser: RwSignal<Browser>, event: BrowserEvent) {
    let request = browser.try_update(|b| b.handle(event)).flatten();

    if let Some(request) = request {
        spawn_local(async move {
            let outcome = fetch_artworks(&request.url).await;
            dispatch(
                browser,
                BrowserEvent::FetchSettled {
                    ticket: request.ticket,
                    outcome,
                },
            );
        });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: BrowserConfig) -> impl IntoView {
    let browser = RwSignal::new(ArtworkBrowser::new(config, BrowserSessionStore));
    let on_event = move |event: BrowserEvent| dispatch(browser, event);
    let on_select_all = move |checked: bool| {
        let ids = browser.with_untracked(|b| b.select_all_ids(checked));
        dispatch(browser, BrowserEvent::SelectionChanged { ids });
    };

    let records = Memo::new(move |_| browser.with(|b| b.records().to_vec()));
    let selected_ids = Memo::new(move |_| browser.with(|b| b.selected_ids()));
    let all_selected = Memo::new(move |_| browser.with(|b| b.all_selected()));
    let loading = Memo::new(move |_| browser.with(|b| b.is_loading()));
    let page = Memo::new(move |_| browser.with(|b| b.page()));
    let total_pages = Memo::new(move |_| browser.with(|b| b.total_pages()));
    let page_links = Memo::new(move |_| browser.with(|b| b.page_links()));
    let bulk_open = Memo::new(move |_| browser.with(|b| b.bulk_select().is_open()));
    let bulk_input = Memo::new(move |_| browser.with(|b| b.bulk_select().input_value()));
    let total_records = Memo::new(move |_| browser.with(|b| b.total_records()));

    // 初回は1ページ目
    on_event(BrowserEvent::Mounted);

    view! {
        <div class="container">
            <Header />

            <ArtworkTable
                records=records
                selected_ids=selected_ids
                all_selected=all_selected
                loading=loading
                bulk_open=bulk_open
                bulk_input=bulk_input
                on_event=on_event
                on_select_all=on_select_all
            />

            <Paginator
                page=page
                total_pages=total_pages
                page_links=page_links
                on_event=on_event
            />

            <p class="selection-summary">
                {move || format!(
                    "{} selected on this page / {} records",
                    selected_ids.with(|ids| ids.len()),
                    total_records.get(),
                )}
            </p>
        </div>
    }
}
