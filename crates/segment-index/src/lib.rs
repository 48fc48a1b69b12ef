#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

pub mod prelude {
    //! Import of useful traits and types from the crate

    pub use crate::{Error, MinAndPos, Result, SegmentIndex, num_traits::Value};
}

mod error;
pub use error::{Error, Result};

pub mod num_traits;

mod index;
pub use index::{MinAndPos, SegmentIndex};
