//! A generic last-in, first-out stack backed by a growable buffer.
//!
//! ## Usage
//!
//! ```
//! use lifo_stack::{EmptyStackError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! stack.push(30);
//! assert_eq!(stack.to_string(), "Stack: [10 20 30]");
//!
//! assert_eq!(stack.peek(), Ok(&30));
//! assert_eq!(stack.pop(), Ok(30));
//! assert!(!stack.is_empty());
//!
//! stack.clear();
//! assert!(stack.is_empty());
//! assert_eq!(stack.pop(), Err(EmptyStackError));
//! ```
//!
//! A [Stack] is meant for single-threaded use. Wrap it in a lock to share it.
pub mod error;
mod macros;
pub mod stack;

pub use error::EmptyStackError;
pub use stack::Stack;
