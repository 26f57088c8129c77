//! Click routing for a multi-select control with removable chips.
//!
//! The control renders as a toggle that opens its dropdown, with the
//! selected values as chips inside it. A chip's delete icon sits inside the
//! toggle, so a click on it bubbles up through the chip to the toggle unless
//! the delete handler stops it. [`MultiSelectClick`] models that bubbling so
//! the contract can be checked without a DOM: the delete handler removes one
//! value and stops propagation, and the toggle only reacts to clicks that
//! reach it.

use crate::filter_criteria::CriterionValue;
use crate::filter_session::FilterSession;


/// Element the click originated on, innermost first when bubbling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    ChipDelete(CriterionValue),
    ChipLabel(CriterionValue),
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectClick {
    target: ClickTarget,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl MultiSelectClick {
    pub fn on(target: ClickTarget) -> Self {
        Self { target, propagation_stopped: false, default_prevented: false }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub open: bool,
}

impl DropdownState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Chip delete handler. Must run before any ancestor handler.
pub fn handle_chip_delete(click: &mut MultiSelectClick, session: &mut FilterSession) {
    let ClickTarget::ChipDelete(value) = &click.target else { return };
    let value = value.clone();
    click.stop_propagation();
    click.prevent_default();
    session.remove_value(&value);
}

/// Bubbles a click from its target up to the toggle.
pub fn dispatch_click(mut click: MultiSelectClick, session: &mut FilterSession, dropdown: &mut DropdownState) -> MultiSelectClick {
    // chip delete -> chip -> toggle
    if matches!(click.target, ClickTarget::ChipDelete(_)) {
        handle_chip_delete(&mut click, session);
    }
    if !click.is_propagation_stopped() {
        dropdown.toggle();
    }
    click
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorId;
    use crate::filter_criteria::{CategoryFilterDefaults, Facet};

    fn session_with_colors(ids: &[u64]) -> FilterSession {
        let mut session = FilterSession::new(CategoryFilterDefaults {
            price_floor: 0.0,
            price_ceiling: 500.0,
            colors: vec![],
            facet_values: Default::default(),
        });
        for id in ids {
            session.toggle_value(CriterionValue::Color(ColorId(*id)));
        }
        session
    }

    #[test]
    fn chip_delete_removes_one_color_and_leaves_dropdown_closed() {
        let mut session = session_with_colors(&[1, 2, 3]);
        let mut dropdown = DropdownState::default();

        let click = dispatch_click(MultiSelectClick::on(ClickTarget::ChipDelete(CriterionValue::Color(ColorId(2)))), &mut session, &mut dropdown);

        assert!(click.is_propagation_stopped());
        assert!(click.is_default_prevented());
        assert!(!dropdown.open);
        assert_eq!(session.draft().colors.iter().map(|c| c.0).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn chip_delete_leaves_open_dropdown_open() {
        let mut session = session_with_colors(&[1]);
        let mut dropdown = DropdownState { open: true };
        dispatch_click(MultiSelectClick::on(ClickTarget::ChipDelete(CriterionValue::Color(ColorId(1)))), &mut session, &mut dropdown);
        assert!(dropdown.open);
        assert!(session.draft().colors.is_empty());
    }

    #[test]
    fn chip_label_click_bubbles_to_toggle() {
        let mut session = session_with_colors(&[1]);
        let mut dropdown = DropdownState::default();
        let click = dispatch_click(MultiSelectClick::on(ClickTarget::ChipLabel(CriterionValue::Color(ColorId(1)))), &mut session, &mut dropdown);
        assert!(!click.is_propagation_stopped());
        assert!(dropdown.open);
        assert_eq!(session.draft().colors.len(), 1);
    }

    #[test]
    fn toggle_click_opens_and_closes() {
        let mut session = session_with_colors(&[]);
        let mut dropdown = DropdownState::default();
        dispatch_click(MultiSelectClick::on(ClickTarget::Toggle), &mut session, &mut dropdown);
        assert!(dropdown.open);
        dispatch_click(MultiSelectClick::on(ClickTarget::Toggle), &mut session, &mut dropdown);
        assert!(!dropdown.open);
    }

    #[test]
    fn facet_chip_delete_does_not_commit() {
        let mut session = session_with_colors(&[]);
        let matte = CriterionValue::Facet(Facet::Finish, "Matte".to_string());
        session.toggle_value(matte.clone());
        session.apply().unwrap();

        let mut dropdown = DropdownState::default();
        dispatch_click(MultiSelectClick::on(ClickTarget::ChipDelete(matte.clone())), &mut session, &mut dropdown);
        assert!(!session.draft().contains(&matte));
        assert!(session.committed().contains(&matte));
        assert!(session.is_dirty());
    }
}
