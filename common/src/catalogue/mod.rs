//! Catalogue pipeline: raw snapshot -> canonical products -> detail view model.
//!
//! Every function here is pure and total. Malformed operator input degrades to empty
//! or best-effort values instead of failing.

pub mod category;
pub mod detail;
pub mod filter;
pub mod normalize;
pub mod segment;
pub mod slug;
