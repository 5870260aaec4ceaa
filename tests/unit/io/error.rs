//! Tests for error formatting and context

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests messages name the offending parameter and value
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("block_size", &0, &"must be positive");
        let message = error.to_string();

        assert!(message.contains("block_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests compositing errors expose the wrapped cause
    // Verified by returning None from source for Compositing
    #[test]
    fn test_compositing_source_chain() {
        let error = MosaicError::Compositing {
            position: (20, 30),
            tile: PathBuf::from("tiles/sky.png"),
            source: Box::new(MosaicError::EmptyBuffer {
                operation: "resample",
            }),
        };

        let message = error.to_string();
        assert!(message.contains("tiles/sky.png"));
        assert!(message.contains("(20, 30)"));
        assert!(
            error
                .source()
                .is_some_and(|cause| cause.to_string().contains("resample"))
        );
    }

    // Tests run-level errors describe their counts
    #[test]
    fn test_run_level_display() {
        let empty = MosaicError::EmptyPalette {
            dataset: PathBuf::from("tiles"),
            skipped: 3,
        };
        let incomplete = MosaicError::IncompleteMosaic {
            failed: 2,
            total: 9,
            output: PathBuf::from("out.png"),
        };

        assert!(empty.to_string().contains("3 unreadable"));
        assert!(incomplete.to_string().contains("2 of 9"));
        assert!(
            MosaicError::NoMatchFound { position: (5, 6) }
                .to_string()
                .contains("(5, 6)")
        );
    }

    // Tests I/O errors pick up the path they concern
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_with_path_on_io_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        match result.with_path(Path::new("tiles")) {
            Err(MosaicError::FileSystem { path, source, .. }) => {
                assert_eq!(path, PathBuf::from("tiles"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }

    // Tests errors without a path slot pass through untouched
    #[test]
    fn test_with_path_keeps_other_errors() {
        let result: Result<(), MosaicError> = Err(MosaicError::ThreadPool {
            reason: "no threads".to_string(),
        });

        assert!(matches!(
            result.with_path(Path::new("ignored")),
            Err(MosaicError::ThreadPool { .. })
        ));
    }
}
