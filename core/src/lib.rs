//! Spatial SEIR epidemic simulation on a cellular-automaton grid.
//!
//! Layering, leaf first:
//!   grid -> rule -> driver -> engine
//! with rng, config, event, snapshot and results alongside.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod event;
pub mod grid;
pub mod results;
pub mod rng;
pub mod rule;
pub mod snapshot;
pub mod types;
