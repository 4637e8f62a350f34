pub mod error;
pub mod layout;
pub mod universe;
pub mod markers;
pub mod fixtures;

pub use error::{PersistenceError, Result};
