use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    UnresolvableCallable,
    CalleeFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::UnresolvableCallable => "UNRESOLVABLE_CALLABLE",
            ErrorCode::CalleeFailure => "CALLEE_FAILURE",
        };
        write!(f, "{}", name)
    }
}

/// Error raised by walker construction or named dispatch.
///
/// The walker itself never catches, wraps, or retries: a callee's error
/// passes through unchanged, and the first failing element aborts the
/// whole operation.
#[derive(Debug, Clone)]
pub struct WalkError {
    pub message: String,
    pub code: Option<ErrorCode>,
}

impl WalkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(ErrorCode::InvalidInput),
        }
    }

    pub fn unresolvable(name: &str) -> Self {
        Self {
            message: format!("Unknown call: {}", name),
            code: Some(ErrorCode::UnresolvableCallable),
        }
    }

    pub fn callee(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(ErrorCode::CalleeFailure),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.code == Some(ErrorCode::InvalidInput)
    }

    pub fn is_unresolvable(&self) -> bool {
        self.code == Some(ErrorCode::UnresolvableCallable)
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for WalkError {}
