use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostboxError {
    #[error("no message exists with id {0}")]
    MessageNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema build error: {0}")]
    SchemaBuild(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PostboxError {
    fn from(err: toml::de::Error) -> Self {
        PostboxError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for PostboxError {
    fn from(err: toml::ser::Error) -> Self {
        PostboxError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PostboxError>;
