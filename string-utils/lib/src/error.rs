use thiserror::Error;

/// Errors raised when an input fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name was empty or contained only whitespace.
    #[error("Name cannot be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_message_is_exact() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
    }

    #[test]
    fn usable_as_boxed_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");
    }
}
