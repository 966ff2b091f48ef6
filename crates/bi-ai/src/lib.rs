#![deny(warnings)]

//! Query intent classification and decision path generation.
//!
//! `classify_intent` maps a free-text query onto an [`bi_core::Intent`];
//! `generate_decision_paths` dispatches on that intent to a family of
//! hand-authored strategies and returns three fully populated paths.

pub mod intent;
pub mod paths;

pub use intent::{classify_intent, extract_city, CITY_GAZETTEER};
pub use paths::{
    generate_decision_paths, generate_paths_for_intent, hiring_context, recommended_index,
    target_city, HiringContext,
};
