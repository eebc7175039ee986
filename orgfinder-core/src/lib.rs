#![cfg_attr(test, deny(warnings))]

//! # orgfinder-core
//!
//! Repository traits, the composable organization query and the use-case
//! layer of the OrgFinder query engine.

pub mod db;
pub mod filter;
pub mod repositories;
pub mod spatial;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use orgfinder_entities::{
        activity::*, building::*, geo::*, id::*, organization::*, phone::*,
    };
}
