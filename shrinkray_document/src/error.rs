use std::fmt::{Display, Formatter};

/// Paths are stored dotted (`Data.RootChunk.boneTransforms[3].Scale.X`);
/// the empty path names the document root.
#[derive(Debug)]
pub enum DocumentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Render(serde_json::Error),
    MissingKey(String),
    NotAMapping(String),
    NotASequence(String),
    NotANumber { path: String, found: &'static str },
    NonFinite(String),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "malformed document: {err}"),
            Self::Render(err) => write!(f, "failed to serialize document: {err}"),
            Self::MissingKey(path) => write!(f, "missing expected key `{path}`"),
            Self::NotAMapping(path) if path.is_empty() => {
                write!(f, "the document root is not a mapping")
            }
            Self::NotAMapping(path) => write!(f, "expected a mapping at `{path}`"),
            Self::NotASequence(path) => write!(f, "expected a sequence at `{path}`"),
            Self::NotANumber { path, found } => {
                write!(f, "expected a number at `{path}`, found {found}")
            }
            Self::NonFinite(path) => {
                write!(f, "scaling `{path}` produced a value JSON cannot represent")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
