// LogTally - lib.rs
//
// Library entry point shared by the `log-analyzer` and `log-cleaner`
// binaries and the integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
