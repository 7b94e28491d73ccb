//! Domain models for harvest forecasting

mod forecast;
mod plot;
mod stage;

pub use forecast::*;
pub use plot::*;
pub use stage::*;
