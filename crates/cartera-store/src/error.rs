use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for cartera-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// Neither candidate roster file exists in the working directory
    NotFound { dir: PathBuf },

    /// The roster file exists but could not be read or parsed
    Load(csv::Error),

    /// Save was refused because the file is held open by another program
    FileBusy { path: PathBuf },

    /// Any other save failure
    Persistence(std::io::Error),
}

impl Error {
    /// Classify a save-path IO failure. An OS permission denial on a file
    /// we just loaded from means another program holds it open (the
    /// spreadsheet being edited is the common case); everything else is a
    /// generic persistence failure.
    pub(crate) fn from_save_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Error::FileBusy {
                path: path.to_path_buf(),
            }
        } else {
            Error::Persistence(err)
        }
    }

    /// Same classification for failures surfacing through the csv writer.
    pub(crate) fn from_save_csv(path: &Path, err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::from_save_io(path, io_err),
            other => Error::Persistence(std::io::Error::other(format!("{:?}", other))),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { dir } => write!(
                f,
                "no roster found in {}: expected CLIENTES.csv or CLIENTES.tsv",
                dir.display()
            ),
            Error::Load(err) => write!(f, "could not read the roster: {}", err),
            Error::FileBusy { path } => write!(
                f,
                "could not save {}: the file is open in another program. Close it and retry; your change was not saved",
                path.display()
            ),
            Error::Persistence(err) => {
                write!(f, "could not save the roster: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Persistence(err) => Some(err),
            Error::NotFound { .. } | Error::FileBusy { .. } => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Load(err)
    }
}
