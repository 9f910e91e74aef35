#![forbid(unsafe_code)]

pub mod filter;
pub mod grading;
pub mod model;

pub use filter::{FacetFilter, Selector, selector_choices};
pub use grading::{Score, is_correct};
