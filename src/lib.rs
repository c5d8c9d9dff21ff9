pub mod list;

mod check;
mod sort;

pub use list::{IntoIter, Iter, IterMut, List};
