//! Quadwell (workspace facade crate).
//!
//! This package keeps the `quadwell::{core,view,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use quadwell_core as core;
pub use quadwell_types as types;
pub use quadwell_view as view;

pub mod observe;
