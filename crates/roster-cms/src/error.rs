use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("graphql error: {0}")]
    GraphQl(String),
}

pub type Result<T> = std::result::Result<T, CmsError>;
