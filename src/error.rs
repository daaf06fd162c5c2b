use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gemini API Key error")]
    MissingCredential,

    #[error("Error retrieving image file")]
    MissingFile,

    #[error("Failed to open image file: {0}")]
    FileOpen(String),

    #[error("Failed to read image file: {0}")]
    Read(String),

    #[error("error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error parsing Gemini response: {0}")]
    ResponseParse(String),

    #[error("no valid response from Gemini")]
    EmptyResponse,

    #[error("error extracting JSON data: no valid JSON found in the response")]
    NoJsonFound,

    #[error("error parsing calorie data: {0}")]
    DataParse(#[source] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn response_parse(msg: impl Into<String>) -> Self {
        Self::ResponseParse(msg.into())
    }

    /// True for failures raised while talking to, or interpreting, the
    /// inference endpoint.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::ResponseParse(_)
                | Self::EmptyResponse
                | Self::NoJsonFound
                | Self::DataParse(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response envelope.
    pub fn response_message(&self) -> String {
        if self.is_upstream() {
            format!("Error calling Gemini API: {}", self)
        } else {
            self.to_string()
        }
    }
}
