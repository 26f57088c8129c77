use common::catalog::CategorySummary;
use dioxus::prelude::*;

use crate::api::catalog_api::list_categories;
use crate::components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper};
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "TileHouse - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            div {
                style: "
                    color: #0F172A;
                    font-size: 40px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "Tiles for every room"
            }
            div {
                style: "
                    color: #374151;
                    font-size: 20px;
                    line-height: 1.6;
                    max-width: 620px;
                ",
                "Browse by category, or start typing in the search box to jump straight to a tile."
            }

            SuspendWrapper {
                CategoryCards {}
            }
        }
    }
}

#[component]
fn CategoryCards() -> Element {
    let categories = use_resource(move || list_categories()).suspend()?.cloned();
    let categories = match categories {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#}", e) } },
        Ok(c) => c,
    };
    rsx! {
        div {
            class: "x-category-cards",
            for category in categories {
                CategoryCard { key: "{category.id.0}", category }
            }
        }
    }
}

#[component]
fn CategoryCard(category: CategorySummary) -> Element {
    rsx! {
        Link {
            class: "x-category-card",
            to: Route::CategoryPage { slug: category.slug.clone() },
            span { style: "font-size: 22px; font-weight: 500;", "{category.name}" }
            span { style: "font-size: 14px; color: #6B7280;", "Shop now →" }
        }
    }
}
