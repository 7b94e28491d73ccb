//! Services used by the command-line tool

pub mod forecast;

pub use forecast::ForecastService;
