pub mod context;
pub mod error;

pub use context::ContentClient;
pub use error::{PresswireError, Result};
