use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum LocateError {
    Io(io::Error),
    FileNotFound { path: String },
    PermissionDenied { path: String },
    IsDirectory { path: String },
    Utf8(std::string::FromUtf8Error),
    /// Seek origin plus offset went below the start of the file
    NegativeSeek { position: i64 },
}

impl LocateError {
    /// Classify a failure to open `path`.
    pub fn from_open(err: io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => LocateError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => LocateError::PermissionDenied { path },
            _ => LocateError::Io(err),
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocateError::Io(e) => Some(e),
            LocateError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocateError::Io(e) => write!(f, "I/O error: {}", e),
            LocateError::FileNotFound { path } => write!(f, "File not found: {}", path),
            LocateError::PermissionDenied { path } => write!(f, "Permission denied: {}", path),
            LocateError::IsDirectory { path } => write!(f, "Is a directory: {}", path),
            LocateError::Utf8(e) => write!(f, "UTF-8 error: {}", e),
            LocateError::NegativeSeek { position } => {
                write!(f, "negative seek position {}", position)
            }
        }
    }
}

impl From<io::Error> for LocateError {
    fn from(err: io::Error) -> Self {
        LocateError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for LocateError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        LocateError::Utf8(err)
    }
}

pub type Result<T> = std::result::Result<T, LocateError>;
