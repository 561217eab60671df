use std::fmt::{Display, Formatter};

use shrinkray_document::DocumentError;

#[derive(Debug)]
pub enum ScaleError {
    Document(DocumentError),
    InvalidSuffix {
        filename: String,
        expected: &'static str,
    },
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document(err) => write!(f, "{err}"),
            Self::InvalidSuffix { filename, expected } => {
                write!(f, "expected a filename ending in `{expected}`, got `{filename}`")
            }
        }
    }
}

impl std::error::Error for ScaleError {}

impl From<DocumentError> for ScaleError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}
