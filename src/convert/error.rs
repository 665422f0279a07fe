use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while converting a single logo.
///
/// None of these abort the batch; the driver reports the message and moves
/// on to the next entry.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot move converted file into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_message_names_file() {
        let e = ConvertError::Open {
            path: PathBuf::from("brands/Avène.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "cannot open brands/Avène.jpg: gone");
    }

    #[test]
    fn test_io_converts_with_question_mark() {
        fn fails() -> Result<(), ConvertError> {
            let write: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
            write?;
            Ok(())
        }
        let e = fails().unwrap_err();
        assert!(matches!(e, ConvertError::Io(_)));
        assert_eq!(e.to_string(), "write error: disk full");
    }
}
