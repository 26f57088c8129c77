//! Filter criteria for category listings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Color, ColorId};


/// Text facets a category may be filtered on besides price and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Facet {
    Finish,
    Material,
}

impl Facet {
    pub const ALL: [Facet; 2] = [Facet::Finish, Facet::Material];

    /// Product column holding this facet's value.
    pub fn column(self) -> &'static str {
        match self {
            Facet::Finish => "finish",
            Facet::Material => "material",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Facet::Finish => "Finish",
            Facet::Material => "Material",
        }
    }
}

/// One selectable value of a multi-select criterion, as rendered in a chip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriterionValue {
    Color(ColorId),
    Facet(Facet, String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_min: f64,
    pub price_max: f64,
    #[serde(default)]
    pub colors: BTreeSet<ColorId>,
    #[serde(default)]
    pub facets: BTreeMap<Facet, BTreeSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("Minimum price ({min}) cannot be greater than maximum price ({max}).")]
    InvertedPriceRange { min: f64, max: f64 },
    #[error("Prices must be zero or more.")]
    InvalidPrice,
}

impl FilterCriteria {
    /// Full price range, nothing selected.
    pub fn unrestricted(price_floor: f64, price_ceiling: f64) -> Self {
        Self { price_min: price_floor, price_max: price_ceiling, colors: BTreeSet::new(), facets: BTreeMap::new() }
    }

    pub fn validate(&self) -> Result<(), CriteriaError> {
        let valid_price = |p: f64| p.is_finite() && p >= 0.0;
        if !valid_price(self.price_min) || !valid_price(self.price_max) {
            return Err(CriteriaError::InvalidPrice);
        }
        if self.price_min > self.price_max {
            return Err(CriteriaError::InvertedPriceRange { min: self.price_min, max: self.price_max });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn contains(&self, value: &CriterionValue) -> bool {
        match value {
            CriterionValue::Color(id) => self.colors.contains(id),
            CriterionValue::Facet(facet, v) => self.facets.get(facet).map(|s| s.contains(v)).unwrap_or(false),
        }
    }

    pub fn insert(&mut self, value: CriterionValue) {
        match value {
            CriterionValue::Color(id) => {
                self.colors.insert(id);
            }
            CriterionValue::Facet(facet, v) => {
                self.facets.entry(facet).or_default().insert(v);
            }
        }
    }

    /// Removes exactly one value. Facets left without values are dropped so
    /// that equality with a pristine criteria set still holds.
    pub fn remove(&mut self, value: &CriterionValue) -> bool {
        match value {
            CriterionValue::Color(id) => self.colors.remove(id),
            CriterionValue::Facet(facet, v) => {
                let Some(entry) = self.facets.get_mut(facet) else { return false };
                let removed = entry.remove(v);
                if entry.is_empty() {
                    self.facets.remove(facet);
                }
                removed
            }
        }
    }

    /// Every multi-select value currently chosen, in chip order.
    pub fn selected_values(&self) -> Vec<CriterionValue> {
        let colors = self.colors.iter().copied().map(CriterionValue::Color);
        let facets = self.facets.iter().flat_map(|(facet, values)| values.iter().map(|v| CriterionValue::Facet(*facet, v.clone())));
        colors.chain(facets).collect()
    }
}

/// What "no filter" means for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilterDefaults {
    pub price_floor: f64,
    pub price_ceiling: f64,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub facet_values: BTreeMap<Facet, Vec<String>>,
}

impl CategoryFilterDefaults {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::unrestricted(self.price_floor, self.price_ceiling)
    }

    pub fn color(&self, id: ColorId) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Chip label for a selected value.
    pub fn label_for(&self, value: &CriterionValue) -> String {
        match value {
            CriterionValue::Color(id) => self.color(*id).map(|c| c.name.clone()).unwrap_or_else(|| format!("Color {}", id.0)),
            CriterionValue::Facet(_, v) => v.clone(),
        }
    }
}
