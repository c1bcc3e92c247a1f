// SliceUtils - lib.rs
//
// Library entry point. The sequence helpers live in `core` and are
// re-exported at the crate root; `platform` and `util` back the CLI in
// `main.rs`.

pub mod core;
pub mod platform;
pub mod util;

pub use crate::core::ext::{SeqExt, SliceExt};
pub use crate::core::seq::{filter, map, push, push_with, try_map, Growth};
