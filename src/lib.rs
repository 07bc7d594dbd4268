//! Grid pursuit game core: maze graph, chase planners and the tick-driven session.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;

pub mod autopilot;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod map;
pub mod pursuit;
