use thiserror::Error;

/// Result alias for the signal core.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors raised by the synthesizer, the filter and the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// A parameter is outside the domain the core accepts.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A parameter or input sample is NaN or infinite.
    #[error("Non-finite value for {name}")]
    NonFinite { name: String },
}

impl SignalError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn non_finite(name: impl Into<String>) -> Self {
        Self::NonFinite { name: name.into() }
    }
}

/// Reject NaN and infinities, naming the offending parameter.
pub fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SignalError::non_finite(name))
    }
}
