use thiserror::Error;

pub type EffectResult<T> = Result<T, EffectError>;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Download directory is unavailable")]
    DownloadDirUnavailable,
}

impl EffectError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        EffectError::Io {
            context: context.into(),
            source,
        }
    }
}
