//! Draft/commit state machine behind a category listing's filter panel.
//!
//! The product grid only ever sees `committed`. Edits land in `draft`, which
//! becomes visible to the grid through `apply` or `clear_all`. Each of those
//! hands out a [`ListingRequest`] with a fresh ticket, and only the response
//! for the latest ticket may be rendered.

use serde::{Deserialize, Serialize};

use crate::filter_criteria::{CategoryFilterDefaults, CriteriaError, CriterionValue, FilterCriteria};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Clean,
    DirtyValid,
    DirtyInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingTicket(pub u64);

/// A product query to run against committed criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRequest {
    pub ticket: ListingTicket,
    pub criteria: FilterCriteria,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSession {
    defaults: CategoryFilterDefaults,
    draft: FilterCriteria,
    committed: FilterCriteria,
    latest_ticket: ListingTicket,
    message_dismissed: bool,
}

impl FilterSession {
    pub fn new(defaults: CategoryFilterDefaults) -> Self {
        let committed = defaults.criteria();
        Self {
            defaults,
            draft: committed.clone(),
            committed,
            latest_ticket: ListingTicket(0),
            message_dismissed: false,
        }
    }

    pub fn defaults(&self) -> &CategoryFilterDefaults {
        &self.defaults
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    pub fn state(&self) -> FilterState {
        match (self.is_dirty(), self.is_valid()) {
            (false, _) => FilterState::Clean,
            (true, true) => FilterState::DirtyValid,
            (true, false) => FilterState::DirtyInvalid,
        }
    }

    pub fn can_apply(&self) -> bool {
        self.state() != FilterState::DirtyInvalid
    }

    /// The inline message for an invalid draft, unless the user dismissed it.
    pub fn validation_message(&self) -> Option<String> {
        if self.message_dismissed {
            return None;
        }
        self.draft.validate().err().map(|e| e.to_string())
    }

    pub fn dismiss_validation_message(&mut self) {
        self.message_dismissed = true;
    }

    /// The query for the grid as it stands; used on first mount.
    pub fn listing_request(&self) -> ListingRequest {
        ListingRequest { ticket: self.latest_ticket, criteria: self.committed.clone() }
    }

    pub fn is_current_listing(&self, ticket: ListingTicket) -> bool {
        ticket == self.latest_ticket
    }

    fn edit(&mut self, f: impl FnOnce(&mut FilterCriteria)) {
        f(&mut self.draft);
        self.message_dismissed = false;
    }

    pub fn set_price_min(&mut self, price_min: f64) {
        self.edit(|d| d.price_min = price_min);
    }

    pub fn set_price_max(&mut self, price_max: f64) {
        self.edit(|d| d.price_max = price_max);
    }

    pub fn toggle_value(&mut self, value: CriterionValue) {
        self.edit(|d| {
            if !d.remove(&value) {
                d.insert(value);
            }
        });
    }

    /// Chip delete: drops exactly `value` from the draft.
    pub fn remove_value(&mut self, value: &CriterionValue) {
        self.edit(|d| {
            d.remove(value);
        });
    }

    fn next_listing(&mut self) -> ListingRequest {
        self.latest_ticket = ListingTicket(self.latest_ticket.0 + 1);
        self.listing_request()
    }

    /// Commits the draft. An invalid draft leaves `committed` untouched and
    /// brings a dismissed validation message back.
    pub fn apply(&mut self) -> Result<ListingRequest, CriteriaError> {
        if let Err(e) = self.draft.validate() {
            self.message_dismissed = false;
            return Err(e);
        }
        self.committed = self.draft.clone();
        Ok(self.next_listing())
    }

    /// Discards draft edits.
    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
        self.message_dismissed = false;
    }

    pub fn clear_all(&mut self) -> ListingRequest {
        self.committed = self.defaults.criteria();
        self.draft = self.committed.clone();
        self.message_dismissed = false;
        self.next_listing()
    }

    /// Restarts the session for new category defaults. Tickets keep
    /// counting up, so responses for the previous category stay stale.
    pub fn reset_defaults(&mut self, defaults: CategoryFilterDefaults) -> ListingRequest {
        self.defaults = defaults;
        self.clear_all()
    }
}
