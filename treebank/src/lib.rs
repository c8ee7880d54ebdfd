#![deny(warnings)]

mod error;
pub use crate::error::TreeError;

mod tree;
pub use crate::tree::Tree;

mod reader;
pub use crate::reader::read_trees;

mod transform;
pub use crate::transform::{CollapseOptions, MarkovOptions};
