pub mod types;
pub mod store;
pub mod validate;

pub use types::*;
pub use store::*;
