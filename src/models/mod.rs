pub mod article;
pub mod entry;

pub use article::Article;
pub use entry::{RawEntry, RawTag};
