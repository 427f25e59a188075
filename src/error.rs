use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Element '{name}' not found in {category}")]
    NotFound { category: String, name: String },

    #[error("Incomplete power move selection: no {0} chosen")]
    IncompleteSelection(&'static str),

    #[error("No recorded element at index {index} (log has {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl JudgeError {
    pub fn not_found(category: impl ToString, name: impl Into<String>) -> Self {
        Self::NotFound {
            category: category.to_string(),
            name: name.into(),
        }
    }
}

pub type JudgeResult<T> = Result<T, JudgeError>;
