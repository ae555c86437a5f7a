//! ページャコンポーネント
//!
//! 先頭・前・番号リンク・次・末尾。クリックは0始まりのインデックスで通知する

use artwork_browser_common::{BrowserEvent, Page};
use leptos::prelude::*;

#[component]
pub fn Paginator<F>(
    page: Memo<Page>,
    total_pages: Memo<u32>,
    page_links: Memo<Vec<Page>>,
    on_event: F,
) -> impl IntoView
where
    F: Fn(BrowserEvent) + 'static + Clone + Send + Sync,
{
    let go = move |target: Page| on_event(BrowserEvent::PageChanged { index: target.index() });

    let at_first = move || page.get() == Page::FIRST || total_pages.get() == 0;
    let at_last = move || page.get().get() >= total_pages.get();

    let go_first = go.clone();
    let go_prev = go.clone();
    let go_link = go.clone();
    let go_next = go.clone();
    let go_last = go;

    view! {
        <nav class="paginator">
            <button
                class="page-nav"
                title="First page"
                disabled=at_first
                on:click=move |_| go_first(Page::FIRST)
            >
                "«"
            </button>
            <button
                class="page-nav"
                title="Previous page"
                disabled=at_first
                on:click=move |_| go_prev(Page::from_index(page.get().index().saturating_sub(1)))
            >
                "‹"
            </button>

            <For
                each=move || page_links.get()
                key=|link| *link
                children=move |link: Page| {
                    let go = go_link.clone();
                    view! {
                        <button
                            class="page-link"
                            class:active=move || page.get() == link
                            on:click=move |_| go(link)
                        >
                            {link.to_string()}
                        </button>
                    }
                }
            />

            <button
                class="page-nav"
                title="Next page"
                disabled=at_last
                on:click=move |_| go_next(Page::from_index(page.get().index() + 1))
            >
                "›"
            </button>
            <button
                class="page-nav"
                title="Last page"
                disabled=at_last
                on:click=move |_| {
                    if let Some(last) = Page::new(total_pages.get()) {
                        go_last(last);
                    }
                }
            >
                "»"
            </button>

            <span class="page-report">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>
        </nav>
    }
}
