use common::navigation::NavTarget;
use common::search_result::SearchSelection;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::category_page::CategoryPage;
use crate::pages::product_page::ProductPage;
use crate::pages::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/category/:slug")]
    CategoryPage { slug: String },


    #[route("/product/:slug")]
    ProductPage { slug: String },

    #[end_layout]

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl From<SearchSelection> for Route {
    fn from(selection: SearchSelection) -> Self {
        match selection {
            SearchSelection::Product { slug } => Route::ProductPage { slug },
            SearchSelection::Category { slug } => Route::CategoryPage { slug },
        }
    }
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::HomePage {},
            NavTarget::Category { slug } => Route::CategoryPage { slug },
        }
    }
}

impl Route {
    /// Menu entry for the current page, if the menu has one.
    pub fn nav_target(&self) -> Option<NavTarget> {
        match self {
            Route::HomePage {} => Some(NavTarget::Home),
            Route::CategoryPage { slug } => Some(NavTarget::Category { slug: slug.clone() }),
            _ => None,
        }
    }
}
