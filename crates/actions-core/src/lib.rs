pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod paths;
pub mod pipeline;
pub mod record;
pub mod writer;

pub use error::{ActionsError, Result};
