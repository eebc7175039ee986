#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # orgfinder-entities
//!
//! Reusable, agnostic domain entities for OrgFinder.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod activity;
pub mod building;
pub mod geo;
pub mod id;
pub mod organization;
pub mod phone;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
