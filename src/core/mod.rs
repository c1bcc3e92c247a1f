// SliceUtils - core/mod.rs
//
// Core logic layer.
// Dependencies: standard library and `tracing` only.
// Must NOT depend on: platform, or perform any I/O.

pub mod ext;
pub mod pipeline;
pub mod seq;
