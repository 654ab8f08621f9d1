// LogTally - app/mod.rs
//
// Application layer: orchestration of one analyzer or cleaner run.
// Dependencies: core, platform, util.

pub mod analyze;
pub mod clean;
pub mod startup;
