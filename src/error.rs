use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The field array sent by the page script was not valid JSON
    #[error("invalid form field payload: {0}")]
    InvalidFields(serde_json::Error),
    /// The header object sent by the page script was not valid JSON
    #[error("invalid header payload: {0}")]
    InvalidHeaders(serde_json::Error),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
