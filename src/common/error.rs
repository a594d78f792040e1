use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown edition: {0}")]
    EditionNotFound(String),

    #[error("Unknown entry '{entry}' in edition '{edition}'")]
    EntryNotFound { edition: String, entry: String },

    #[error("Invalid entry name '{0}': only [A-Za-z0-9_-] is allowed")]
    InvalidEntryName(String),

    #[error("Malformed record '{name}': {message}")]
    MalformedRecord { name: String, message: String },

    #[error("Catalog startup failed: {message}")]
    Startup { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
