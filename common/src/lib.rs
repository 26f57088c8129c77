//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog;
pub mod search_const;
pub mod search_result;
pub mod search_engine;
pub mod filter_criteria;
pub mod filter_session;
pub mod chip_events;
pub mod navigation;
pub mod price_input;
