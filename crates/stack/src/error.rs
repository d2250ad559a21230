/// Returned by [Stack::pop](crate::Stack::pop) and [Stack::peek](crate::Stack::peek) when the
/// stack holds no elements. The stack is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stack empty")]
pub struct EmptyStackError;

#[cfg(test)]
mod tests {
    use super::EmptyStackError;

    #[test]
    fn message() {
        assert_eq!(EmptyStackError.to_string(), "stack empty");
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = EmptyStackError.into();
        assert_eq!(err.to_string(), "stack empty");
    }
}
