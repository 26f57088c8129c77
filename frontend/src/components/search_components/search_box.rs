//! Search-as-you-type box in the top bar.

use common::search_engine::{LookupError, LookupOutcome, SearchController, TermChange};
use common::search_result::SearchSelection;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};
use gloo_timers::future::TimeoutFuture;

use crate::{api::catalog_api::search_catalog, components::search_components::search_results_panel::SearchResultsPanel, routes::Route};


fn lookup_error(e: ServerFnError) -> LookupError {
    match e {
        ServerFnError::ServerError { message, .. } if message.contains("malformed response") => LookupError::MalformedResponse(message),
        other => LookupError::Transport(other.to_string()),
    }
}

/// What the results dropdown needs from the search box.
#[derive(Clone, Copy)]
pub struct SearchBoxState {
    pub search: ReadSignal<SearchController>,
    pub on_select: Callback<SearchSelection>,
    pub on_close: Callback<()>,
}

#[component]
pub fn SearchBox() -> Element {
    let mut search = use_signal(SearchController::default);
    // one pending timer; a new keystroke cancels it
    let mut pending = use_signal(|| None::<Task>);

    let on_term_change = move |event: Event<FormData>| {
        let change = search.write().on_term_change(event.value());
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let TermChange::Armed { seq, delay } = change else { return };

        let task = spawn(async move {
            TimeoutFuture::new(delay.as_millis() as u32).await;
            let Some(request) = search.write().on_timer_elapsed(seq) else { return };
            let response = search_catalog(request.term.clone()).await.map_err(lookup_error);
            if let Err(e) = &response {
                warn!("search for {:?} failed: {}", request.term, e);
            }
            if search.write().on_lookup_settled(request.seq, response) == LookupOutcome::Discarded {
                debug!("discarded stale search response for {:?}", request.term);
            }
        });
        pending.set(Some(task));
    };

    let on_select = Callback::new(move |selection: SearchSelection| {
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let target = search.write().on_result_selected(selection);
        navigator().push(Route::from(target));
    });
    let on_close = Callback::new(move |_: ()| {
        search.write().close_panel();
    });
    use_context_provider(move || SearchBoxState { search: search.into(), on_select, on_close });

    let on_keydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Escape {
            search.write().close_panel();
        }
    };
    let has_term = use_memo(move || !search.read().term().is_empty());

    rsx! {
        div {
            id: "x-search-box",
            style: "position: relative; flex: 1; max-width: 560px;",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 8px 14px;
                    height: 40px;
                    border: 1px solid rgba(101, 101, 101, 0.6);
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "search",
                    placeholder: "Search tiles and categories",
                    aria_label: "Search the shop",
                    autocomplete: "off",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                        font-family: Roboto, sans-serif;
                    ",
                    value: "{search.read().term()}",
                    oninput: on_term_change,
                    onkeydown: on_keydown,
                    onfocus: move |_| search.write().reopen_panel(),
                }
                if has_term() {
                    button {
                        class: "x-icon-button",
                        aria_label: "Clear search",
                        onclick: move |_| {
                            if let Some(task) = pending.write().take() {
                                task.cancel();
                            }
                            search.write().reset();
                        },
                        Icon { icon: MdClose, style: "width: 18px; height: 18px; color: #6B7280;" }
                    }
                }
            }
            if search.read().is_panel_open() {
                SearchResultsPanel {}
            }
        }
    }
}
