use std::fmt;

/// Errors raised while evaluating and firing dispatchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A predicate could not be evaluated because a required attribute or
    /// field was absent from the entity.
    PredicateEvaluation {
        dispatcher: String,
        detail: String,
    },
    /// A handler failed while executing its side effect.
    HandlerExecution {
        handler: String,
        message: String,
    },
    /// A dispatcher was declared with parameters that can never fire.
    MisconfiguredDispatcher(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::PredicateEvaluation { dispatcher, detail } => {
                write!(f, "predicate evaluation failed for {}: {}", dispatcher, detail)
            }
            DispatchError::HandlerExecution { handler, message } => {
                write!(f, "handler {} failed: {}", handler, message)
            }
            DispatchError::MisconfiguredDispatcher(detail) => {
                write!(f, "misconfigured dispatcher: {}", detail)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Failure raised inside a handler's `handle`.
///
/// Wrapped into [`DispatchError::HandlerExecution`] at the invoke seam, so
/// the dispatch engine reports which handler failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        HandlerError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HandlerError {}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        HandlerError::new(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        HandlerError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_names() {
        let err = DispatchError::HandlerExecution {
            handler: "send_email".to_string(),
            message: "smtp unreachable".to_string(),
        };
        assert_eq!(err.to_string(), "handler send_email failed: smtp unreachable");

        let err = DispatchError::PredicateEvaluation {
            dispatcher: "property:should_send_email".to_string(),
            detail: "no such property".to_string(),
        };
        assert!(err.to_string().contains("should_send_email"));
    }

    #[test]
    fn handler_error_from_str() {
        let err: HandlerError = "boom".into();
        assert_eq!(err.message(), "boom");
    }
}
