mod buffer;
mod error;

pub use buffer::*;
pub use error::*;
