// LogTally - core/mod.rs
//
// Core business logic layer: grammar, aggregation, report, cleaning.
// Must NOT depend on: platform, or touch the filesystem directly.

pub mod cleaner;
pub mod export;
pub mod grammar;
pub mod model;
pub mod report;
pub mod rules;
pub mod stats;
