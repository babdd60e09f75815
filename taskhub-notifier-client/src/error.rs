use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-2xx status and an error envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
