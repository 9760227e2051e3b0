mod utils;
mod protocol;
mod chunk;

// Re-export commonly used types at crate root
pub use utils::*;
pub use protocol::*;
pub use chunk::*;
