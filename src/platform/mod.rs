// LogTally - platform/mod.rs
//
// Platform abstraction layer: config directories and file I/O.
// Dependencies: standard library, directories crate, util layer.

pub mod config;
pub mod fs;
