#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown subject `{0}`")]
    InvalidSubject(String),

    #[error("a submission is already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Field names rejected by validation, sorted for stable rendering.
    pub fn invalid_fields(&self) -> Vec<String> {
        let Self::Validate(errors) = self else {
            return vec![];
        };

        let mut fields = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort_unstable();
        fields
    }
}
