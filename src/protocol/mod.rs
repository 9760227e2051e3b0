mod chunk_type;
mod types;
pub mod constants;

pub use chunk_type::*;
pub use types::*;
pub use constants::*;
