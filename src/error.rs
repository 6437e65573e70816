use std::fmt;

#[derive(Debug)]
pub enum InvokeError {
    InvalidTarget(String),
    BadParameter(String),
    NotInitialized,
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::InvalidTarget(msg) => write!(f, "Invalid target: {}", msg),
            InvokeError::BadParameter(token) => {
                write!(f, "Bad parameter '{}'. Use key=value format.", token)
            }
            InvokeError::NotInitialized => write!(f, "Session not initialised"),
        }
    }
}

impl std::error::Error for InvokeError {}
