//! Storefront navigation tree.

use serde::{Deserialize, Serialize};

use crate::catalog::CategorySummary;


/// Route targets the navigation can point at, independent of the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    Home,
    Category { slug: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavItem {
    Leaf { label: String, target: NavTarget },
    Group { label: String, children: Vec<NavItem> },
}

impl NavItem {
    pub fn leaf(label: impl Into<String>, target: NavTarget) -> Self {
        NavItem::Leaf { label: label.into(), target }
    }

    pub fn group(label: impl Into<String>, children: Vec<NavItem>) -> Self {
        NavItem::Group { label: label.into(), children }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Leaf { label, .. } | NavItem::Group { label, .. } => label,
        }
    }

    /// True when `target` is this item or anywhere below it.
    pub fn leads_to(&self, target: &NavTarget) -> bool {
        match self {
            NavItem::Leaf { target: t, .. } => t == target,
            NavItem::Group { children, .. } => children.iter().any(|c| c.leads_to(target)),
        }
    }
}

/// Top-level menu: home, then every category grouped under "Tiles".
pub fn storefront_menu(categories: &[CategorySummary]) -> Vec<NavItem> {
    let category_items = categories
        .iter()
        .map(|c| NavItem::leaf(c.name.clone(), NavTarget::Category { slug: c.slug.clone() }))
        .collect::<Vec<_>>();
    let mut menu = vec![NavItem::leaf("Home", NavTarget::Home)];
    if !category_items.is_empty() {
        menu.push(NavItem::group("Tiles", category_items));
    }
    menu
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryId;

    fn category(id: u64, name: &str, slug: &str) -> CategorySummary {
        CategorySummary { id: CategoryId(id), name: name.to_string(), slug: slug.to_string() }
    }

    #[test]
    fn menu_groups_categories() {
        let menu = storefront_menu(&[category(1, "Floor Tiles", "floor-tiles"), category(2, "Wall Tiles", "wall-tiles")]);
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[1].label(), "Tiles");
        let wall = NavTarget::Category { slug: "wall-tiles".to_string() };
        assert!(menu[1].leads_to(&wall));
        assert!(!menu[0].leads_to(&wall));
        assert!(!menu[1].leads_to(&NavTarget::Home));
    }

    #[test]
    fn empty_group_is_omitted() {
        let menu = storefront_menu(&[]);
        assert_eq!(menu, vec![NavItem::leaf("Home", NavTarget::Home)]);
    }
}
