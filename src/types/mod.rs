pub mod article;
pub mod error;

pub use article::{Article, WordInfo};
pub use error::{ExtractError, SourceError};
