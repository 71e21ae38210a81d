pub type FieldResult<T> = Result<T, FieldError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl FieldError {
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
