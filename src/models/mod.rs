pub mod error;
pub mod thresholds;
pub mod user;

pub use error::*;
pub use thresholds::*;
pub use user::*;
