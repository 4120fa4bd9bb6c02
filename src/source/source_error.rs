/// Failure to obtain a document. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Could not read from source `{location}`")]
    Unreadable {
        location: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Unsupported source `{0}`")]
    UnsupportedSource(String),

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
}
