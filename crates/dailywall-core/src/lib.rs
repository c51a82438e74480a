//! dailywall-core: pure logic (classification, feed model, cache layout, errors).

pub mod cache;
pub mod classification;
pub mod error;
pub mod feed;
pub mod uri;

pub use error::{Error, Result};
