// src/session/mod.rs
//! Session state and everything derived from it.
//!
//! - `form`: what the user typed (raw, never derived)
//! - `engine`: pure derivation (FAFSA, work reduction, net balance, eligibility window)
//! - `store`: owns the form, recomputes after each mutation
//! - `selection`: picked schools
//! - `pathway`: semester checklist templates
pub mod engine;
pub mod form;
pub mod pathway;
pub mod selection;
pub mod store;

pub use engine::{ derive, DerivedFinancials, DerivedView, EligibilityWindow };
pub use form::SessionForm;
pub use selection::SelectedSchoolSet;
pub use store::SessionStore;
