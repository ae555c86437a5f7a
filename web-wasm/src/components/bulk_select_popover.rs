//! 先頭N行の一括選択ポップオーバー

use artwork_browser_common::BrowserEvent;
use leptos::prelude::*;

#[component]
pub fn BulkSelectPopover<F>(
    open: Memo<bool>,
    input: Memo<String>,
    loading: Memo<bool>,
    on_event: F,
) -> impl IntoView
where
    F: Fn(BrowserEvent) + 'static + Clone + Send + Sync,
{
    let on_toggle = {
        let on_event = on_event.clone();
        move |_| on_event(BrowserEvent::BulkSelectToggled)
    };

    view! {
        <div class="bulk-select">
            <button
                class="btn btn-icon"
                title="Select first rows"
                class:active=move || open.get()
                on:click=on_toggle
            >
                "▾"
            </button>
            {move || open.get().then(|| {
                let on_input = on_event.clone();
                let on_submit = on_event.clone();
                view! {
                    <div class="bulk-select-panel">
                        <input
                            type="number"
                            min="0"
                            class="bulk-select-input"
                            placeholder="Input number"
                            prop:value=move || input.get()
                            on:input=move |ev| {
                                on_input(BrowserEvent::BulkSelectCountChanged {
                                    input: event_target_value(&ev),
                                });
                            }
                        />
                        <button
                            class="btn btn-primary btn-small"
                            disabled=move || loading.get()
                            on:click=move |_| on_submit(BrowserEvent::BulkSelectSubmitted)
                        >
                            "Submit"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
