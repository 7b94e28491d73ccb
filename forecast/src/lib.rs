//! Harvest and yield forecasting for coffee plots
//!
//! Pure computation shared by the command-line tool and the WASM bindings
//! used by the web and mobile frontends. Nothing in this crate performs I/O.

pub mod batch;
pub mod calibration;
pub mod detailed;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod ripeness;
pub mod types;
pub mod validation;

pub use batch::*;
pub use calibration::*;
pub use detailed::*;
pub use error::*;
pub use forecaster::*;
pub use models::*;
pub use ripeness::*;
pub use types::*;
pub use validation::*;
