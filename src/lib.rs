//! A generic last-in-first-out container.
//!
//! ```
//! use pilha::{Error, Stack};
//!
//! let mut st = Stack::new();
//! st.push(1);
//! st.push(2);
//! assert_eq!(st.peek(), Ok(&2));
//! assert_eq!(st.pop(), Ok(2));
//! assert_eq!(st.pop(), Ok(1));
//! assert_eq!(st.pop(), Err(Error::EmptyStack));
//! ```
mod err;
pub mod stack;

pub use err::{Error, EMPTY_STACK_MESSAGE};
pub use stack::Stack;
