use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "TileHouse - Not found" }
        div {
            style: "padding: 32px; max-width: 720px; margin: 0 auto;",
            h1 { style: "font-size: 36px; margin-bottom: 12px;", "Page not found" }
            p {
                style: "color: #4B5563; font-size: 18px; margin-bottom: 24px;",
                "Nothing lives at /{path}."
            }
            Link { to: Route::HomePage {}, "Back to the shop" }
        }
    }
}
