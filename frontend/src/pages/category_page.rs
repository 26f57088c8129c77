//! Category listing: product grid plus its filter panel.

use common::catalog::{CategorySummary, ProductSummary};
use common::filter_criteria::CategoryFilterDefaults;
use common::filter_session::{FilterSession, ListingRequest};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdFilterList};

use crate::api::catalog_api::{category_filter_defaults, get_category, list_category_products};
use crate::components::{
    error_boundary::ComponentErrorDisplay,
    filter_components::filter_panel::{FilterOverlay, FilterSidebar},
    product_components::product_grid::ProductGrid,
    suspend_boundary::SuspendWrapper,
};
use crate::data_definitions::filter_context::FilterContext;


#[component]
pub fn CategoryPage(slug: ReadSignal<String>) -> Element {
    rsx! {
        SuspendWrapper {
            CategoryListing { slug }
        }
    }
}

#[component]
fn CategoryListing(slug: ReadSignal<String>) -> Element {
    // both lookups start before either suspends
    let category = use_resource(move || get_category(slug.read().clone()));
    let defaults = use_resource(move || category_filter_defaults(slug.read().clone()));
    let category = category.suspend()?.cloned();
    let defaults = defaults.suspend()?.cloned();
    let (category, defaults) = match (category, defaults) {
        (Err(e), _) | (_, Err(e)) => return rsx! {
            Title { "TileHouse - Not found" }
            ComponentErrorDisplay { error_txt: format!("{:#}", e) }
        },
        (Ok(c), Ok(d)) => (c, d),
    };

    rsx! {
        Title { "TileHouse - {category.name}" }
        FilterableProductGrid { category, defaults }
    }
}

#[component]
fn FilterableProductGrid(category: ReadSignal<CategorySummary>, defaults: ReadSignal<CategoryFilterDefaults>) -> Element {
    let mut session = use_signal(|| FilterSession::new(defaults.peek().clone()));
    let mut products = use_signal(|| None::<Result<Vec<ProductSummary>, ServerFnError>>);
    let mut overlay_open = use_signal(|| false);

    let run_listing = Callback::new(move |request: ListingRequest| {
        let slug = category.peek().slug.clone();
        spawn(async move {
            let response = list_category_products(slug.clone(), request.criteria).await;
            // an older apply may settle after a newer one
            if !session.peek().is_current_listing(request.ticket) {
                debug!("discarded stale listing for {} ({:?})", slug, request.ticket);
                return;
            }
            if let Err(e) = &response {
                warn!("listing for {} failed: {}", slug, e);
            }
            products.set(Some(response));
        });
    });

    // new category: restart the session from its defaults
    use_effect(move || {
        let defaults = defaults.read().clone();
        let request = session.write().reset_defaults(defaults);
        products.set(None);
        run_listing.call(request);
    });

    let on_apply = Callback::new(move |_: ()| {
        let applied = session.write().apply();
        match applied {
            Ok(request) => {
                overlay_open.set(false);
                run_listing.call(request);
            }
            Err(e) => debug!("apply blocked: {}", e),
        }
    });
    let on_cancel = Callback::new(move |_: ()| {
        session.write().cancel();
        overlay_open.set(false);
    });
    let on_clear_all = Callback::new(move |_: ()| {
        let request = session.write().clear_all();
        overlay_open.set(false);
        run_listing.call(request);
    });
    let on_retry = Callback::new(move |_: ()| {
        products.set(None);
        let request = session.peek().listing_request();
        run_listing.call(request);
    });
    use_context_provider(move || FilterContext { session, on_apply, on_cancel, on_clear_all });

    let selected_count = session.read().committed().selected_values().len();

    rsx! {
        div {
            class: "x-category-layout",
            FilterSidebar {}
            div {
                class: "x-category-main",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px; margin-bottom: 16px;",
                    h1 { style: "flex: 1; font-size: 28px; font-weight: 500;", "{category.read().name}" }
                    button {
                        class: "x-button x-filters-button",
                        onclick: move |_| overlay_open.set(true),
                        Icon { icon: MdFilterList, style: "width: 18px; height: 18px;" }
                        if selected_count > 0 {
                            "Filters ({selected_count})"
                        } else {
                            "Filters"
                        }
                    }
                }
                ProductGrid { products, on_retry }
            }
            if overlay_open() {
                FilterOverlay {}
            }
        }
    }
}
