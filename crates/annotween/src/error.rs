pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed RLE counts string at byte {position}: {reason}")]
    MalformedCounts { position: usize, reason: &'static str },

    #[error("cannot interpolate a {first} into a {second}")]
    ShapeMismatch {
        first: &'static str,
        second: &'static str,
    },

    #[error("{kind} needs at least {required} vertices, got {actual}")]
    TooFewVertices {
        kind: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("canvas error: {0}")]
    Canvas(String),
}

impl Error {
    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }
}
