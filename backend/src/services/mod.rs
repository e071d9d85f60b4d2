//! Business logic services for the AgroMarket weather server

pub mod weather;

pub use weather::WeatherService;
