//! Domain models for the AgroMarket weather dashboards

mod forecast;
mod location;

pub use forecast::*;
pub use location::*;
