// SliceUtils - platform/mod.rs
//
// Filesystem-facing layer: configuration loading.

pub mod config;
