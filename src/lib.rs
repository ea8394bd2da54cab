mod error;
mod linked_list;
mod node;

pub use error::{EmptyListError, Result};
pub use linked_list::{IntoIter, Iter, LinkedList};
pub use node::Node;
