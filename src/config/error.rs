use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },

    #[error("Invalid contract address in {name}: {value}")]
    InvalidAddress { name: String, value: String },
}

impl ConfigError {
    pub fn invalid_value(name: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
