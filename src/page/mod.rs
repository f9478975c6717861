pub mod page;
pub mod selector;

pub use page::Page;
pub use selector::{HtmlNodeSelector, NodeSelector, SelectedNodes};
