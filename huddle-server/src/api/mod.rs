mod error;
mod info;
mod rooms;

pub use error::*;
pub use info::*;
pub use rooms::*;
