use std::error;
use std::fmt;

/// Message carried by `Error::EmptyStack`. Consumers match on this text.
pub const EMPTY_STACK_MESSAGE: &str = "A pilha está vazia.";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Pop or peek attempted on a stack with no elements.
    EmptyStack,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyStack => return write!(f, "{}", EMPTY_STACK_MESSAGE),
        };
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::EmptyStack), "A pilha está vazia.");
        assert_eq!(Error::EmptyStack.to_string(), EMPTY_STACK_MESSAGE);
    }

    #[test]
    fn test_error_as_dyn_error() {
        let e: Box<dyn error::Error> = Box::new(Error::EmptyStack);
        assert_eq!(e.to_string(), EMPTY_STACK_MESSAGE);
        assert!(error::Error::source(e.as_ref()).is_none());
    }
}
