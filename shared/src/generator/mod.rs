//! Deterministic synthetic weather generator
//!
//! Everything here is pure: a county name goes in, the same
//! [`ForecastRecord`](crate::models::ForecastRecord) comes out every time.

pub mod assembler;
pub mod hash;
pub mod labels;
pub mod pools;
pub mod sampling;
pub mod stream;

pub use assembler::ForecastGenerator;
pub use hash::hash;
pub use pools::{AlertTemplate, DescriptionPool, ForecastPools};
pub use stream::RandomStream;
