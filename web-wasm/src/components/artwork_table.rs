//! 作品一覧テーブルコンポーネント

use artwork_browser_common::{Artwork, BrowserEvent};
use leptos::prelude::*;
use crate::components::bulk_select_popover::BulkSelectPopover;
use crate::components::loading_overlay::LoadingOverlay;

const COLUMN_COUNT: usize = 7;

#[component]
pub fn ArtworkTable<F, FA>(
    records: Memo<Vec<Artwork>>,
    selected_ids: Memo<Vec<u64>>,
    all_selected: Memo<bool>,
    loading: Memo<bool>,
    bulk_open: Memo<bool>,
    bulk_input: Memo<String>,
    on_event: F,
    on_select_all: FA,
) -> impl IntoView
where
    F: Fn(BrowserEvent) + 'static + Clone + Send + Sync,
    FA: Fn(bool) + 'static,
{
    let on_header_event = on_event.clone();
    let is_empty = move || records.with(|r| r.is_empty()) && !loading.get();

    view! {
        <div class="artwork-table" class:loading=move || loading.get()>
            <Show when=move || loading.get()>
                <LoadingOverlay />
            </Show>
            <table>
                <thead>
                    <tr>
                        <th class="selection-column">
                            <div class="selection-header">
                                <input
                                    type="checkbox"
                                    title="Select all rows on this page"
                                    prop:checked=move || all_selected.get()
                                    disabled=move || loading.get() || records.with(|r| r.is_empty())
                                    on:change=move |ev| on_select_all(event_target_checked(&ev))
                                />
                                <BulkSelectPopover
                                    open=bulk_open
                                    input=bulk_input
                                    loading=loading
                                    on_event=on_header_event
                                />
                            </div>
                        </th>
                        <th>"Title"</th>
                        <th>"Place of Origin"</th>
                        <th>"Artist Display"</th>
                        <th>"Inscriptions"</th>
                        <th>"Date Start"</th>
                        <th>"Date End"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || records.get()
                        key=|artwork| artwork.id
                        children=move |artwork| {
                            let on_event = on_event.clone();
                            view! {
                                <ArtworkRow
                                    artwork=artwork
                                    selected_ids=selected_ids
                                    loading=loading
                                    on_event=on_event
                                />
                            }
                        }
                    />
                    {move || is_empty().then(|| view! {
                        <tr class="empty-row">
                            <td colspan=COLUMN_COUNT.to_string()>"No records found"</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ArtworkRow<F>(
    artwork: Artwork,
    selected_ids: Memo<Vec<u64>>,
    loading: Memo<bool>,
    on_event: F,
) -> impl IntoView
where
    F: Fn(BrowserEvent) + 'static + Clone + Send + Sync,
{
    let id = artwork.id;
    let is_selected = move || selected_ids.with(|ids| ids.contains(&id));

    view! {
        <tr class:selected=is_selected>
            <td class="selection-column">
                <input
                    type="checkbox"
                    prop:checked=is_selected
                    disabled=move || loading.get()
                    on:change=move |_| on_event(BrowserEvent::RowToggled { id })
                />
            </td>
            <td>{artwork.title}</td>
            <td>{artwork.place_of_origin}</td>
            <td>{artwork.artist_display}</td>
            <td>{artwork.inscriptions}</td>
            <td>{year(artwork.date_start)}</td>
            <td>{year(artwork.date_end)}</td>
        </tr>
    }
}

fn year(value: Option<i32>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}
