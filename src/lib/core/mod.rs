pub mod error;
pub mod id;
pub mod todo;

pub use error::*;
pub use id::*;
pub use todo::*;
