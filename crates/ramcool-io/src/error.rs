use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PassError {
    OpenInput { path: PathBuf, source: io::Error },
    CreateOutput { path: PathBuf, source: io::Error },
    Read(io::Error),
    Write(io::Error),
    ReadSettings { path: PathBuf, source: io::Error },
    ParseSettings { path: PathBuf, source: toml::de::Error },
    /// Output would overwrite the input.
    SameFile(PathBuf),
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::OpenInput { path, .. } => {
                write!(f, "cannot open input {}", path.display())
            }
            PassError::CreateOutput { path, .. } => {
                write!(f, "cannot create output {}", path.display())
            }
            PassError::Read(e) => write!(f, "read error: {e}"),
            PassError::Write(e) => write!(f, "write error: {e}"),
            PassError::ReadSettings { path, .. } => {
                write!(f, "cannot read settings {}", path.display())
            }
            PassError::ParseSettings { path, .. } => {
                write!(f, "invalid settings in {}", path.display())
            }
            PassError::SameFile(path) => write!(
                f,
                "output {} is the input file; refusing to rewrite in place",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PassError::OpenInput { source, .. }
            | PassError::CreateOutput { source, .. }
            | PassError::ReadSettings { source, .. } => Some(source),
            PassError::ParseSettings { source, .. } => Some(source),
            PassError::Read(e) | PassError::Write(e) => Some(e),
            PassError::SameFile(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PassError>;
