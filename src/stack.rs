use log::debug;

use crate::err::Error;

/// Last-in-first-out container. The end of `data` is the top.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { data: Vec::new() }
    }

    /// Preallocates room for `capacity` elements. The stack still grows
    /// past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Elements from bottom to top.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn push(&mut self, d: T) {
        self.data.push(d)
    }

    /// Removes and returns the top element.
    ///
    /// Fails with `Error::EmptyStack` when there is nothing to pop, in
    /// which case the stack is left untouched.
    pub fn pop(&mut self) -> Result<T, Error> {
        match self.data.pop() {
            Some(v) => Ok(v),
            None => {
                debug!("stack.pop on empty stack");
                Err(Error::EmptyStack)
            }
        }
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        match self.data.last() {
            Some(v) => Ok(v),
            None => {
                debug!("stack.peek on empty stack");
                Err(Error::EmptyStack)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        debug!("stack.clear len={}", self.data.len());
        self.data.clear()
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes `ds` in order; the last element of the slice ends on top.
    pub fn push_n(&mut self, ds: &[T]) {
        self.data.extend_from_slice(ds)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}
