//! Top navigation bar with the category menu and the search box.

use common::navigation::{NavItem, storefront_menu};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};

use crate::api::catalog_api::list_categories;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::search_components::search_box::SearchBox;
use crate::routes::Route;


/// Shared navbar layout.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            header {
                id: "x-nav-topbar",
                class: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    padding: 12px 24px;
                    background-color: #1C212D;
                    position: sticky;
                    top: 0px;
                    z-index: 900;
                ",
                NavbarLogo {}
                NavbarMenu {}
                SearchBox {}
            }

            main {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "color: white; font-size: 22px; font-weight: 700; letter-spacing: -0.02em; text-decoration: none;",
            "Tile"
            span { style: "color: #F59E0B;", "House" }
        }
    }
}

#[component]
fn NavbarMenu() -> Element {
    // a failed category fetch only costs the menu its category group
    let categories = use_resource(move || list_categories());
    let menu = match &*categories.read() {
        Some(Ok(categories)) => storefront_menu(categories),
        Some(Err(e)) => {
            dioxus::logger::tracing::warn!("could not load categories for the menu: {}", e);
            storefront_menu(&[])
        }
        None => storefront_menu(&[]),
    };

    rsx! {
        nav {
            class: "x-nav-menu",
            style: "display: flex; flex-direction: row; gap: 16px; align-items: center;",
            for item in menu {
                NavMenuItem { key: "{item.label()}", item: item.clone() }
            }
        }
    }
}

#[component]
fn NavMenuItem(item: NavItem) -> Element {
    let mut open = use_signal(|| false);
    let current = use_route::<Route>().nav_target();
    let active = current.as_ref().is_some_and(|target| item.leads_to(target));
    let link_class = if active { "x-nav-link x-nav-link-active" } else { "x-nav-link" };
    match item {
        NavItem::Leaf { label, target } => rsx! {
            Link {
                to: Route::from(target),
                class: "{link_class}",
                onclick: move |_| open.set(false),
                "{label}"
            }
        },
        NavItem::Group { label, children } => rsx! {
            div {
                style: "position: relative;",
                onmouseleave: move |_| open.set(false),
                button {
                    class: link_class,
                    aria_expanded: "{open}",
                    onclick: move |_| open.toggle(),
                    "{label}"
                    Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px; vertical-align: middle;" }
                }
                if open() {
                    div {
                        class: "x-nav-submenu",
                        onclick: move |_| open.set(false),
                        for child in children.iter().cloned() {
                            NavMenuItem { key: "{child.label()}", item: child }
                        }
                    }
                }
            }
        },
    }
}
