pub mod error;
pub mod logging;
pub mod consts;

pub use error::{AurumError, Result};
pub use logging::setup_logging;
pub use consts::*;
