//! Error types for hdtp

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for hdtp operations
#[derive(Debug, Error)]
pub enum HdtpError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command line values
    #[error("Configuration error: {0}")]
    Config(String),

    /// The base path itself is missing
    #[error("Base path does not exist: {}", .0.display())]
    BaseNotFound(PathBuf),

    /// One or more required texture folders are missing under the base path
    #[error("Missing required directories: {}", .0.join(", "))]
    MissingDirectories(Vec<String>),

    /// Permission denied for specific path
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// External copy tool reported a serious error code
    #[error("{program} reported issues (exit code {code}): {details}")]
    SubprocessFailed {
        program: String,
        code: i32,
        details: String,
    },

    /// External copy tool could not be started at all
    #[error("Failed to launch {program}: {source}")]
    SubprocessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Run cancelled from the keyboard
    #[error("Operation cancelled by user")]
    Interrupted,
}

impl HdtpError {
    /// Wrap an IO error that happened at `path`, keeping permission problems distinct.
    pub fn at_path(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            ErrorKind::PermissionDenied => HdtpError::PermissionDenied {
                path: path.to_path_buf(),
            },
            ErrorKind::NotFound => HdtpError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                format!("{}: {}", path.display(), error),
            )),
            _ => HdtpError::Io(error),
        }
    }

    /// Check if this error came out of path validation
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            HdtpError::BaseNotFound(_) | HdtpError::MissingDirectories(_) | HdtpError::Config(_)
        )
    }

    /// Check if this error means a path was not found
    pub fn is_not_found(&self) -> bool {
        match self {
            HdtpError::BaseNotFound(_) | HdtpError::MissingDirectories(_) => true,
            HdtpError::Io(e) => e.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        match self {
            HdtpError::PermissionDenied { .. } => true,
            HdtpError::Io(e) => e.kind() == ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Check if this error is related to the external copy tool
    pub fn is_subprocess_error(&self) -> bool {
        matches!(
            self,
            HdtpError::SubprocessFailed { .. } | HdtpError::SubprocessLaunch { .. }
        )
    }

    /// Heading printed above a fatal error
    pub fn category(&self) -> &'static str {
        if self.is_not_found() {
            "File not found error"
        } else if self.is_permission_error() {
            "Permission error"
        } else if self.is_subprocess_error() {
            "Subprocess error"
        } else if matches!(self, HdtpError::Interrupted) {
            "Interrupted"
        } else {
            "An unexpected error occurred"
        }
    }

    /// Follow-up advice printed after a fatal error
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_not_found() {
            Some("Please check the paths and try again.")
        } else if self.is_permission_error() {
            Some("Please check your permissions and try again.")
        } else if self.is_subprocess_error() {
            Some("There was an error with a subprocess call.")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Error as IoError;

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::Other, "disk on fire");
        let err: HdtpError = io_error.into();

        assert!(matches!(err, HdtpError::Io(_)));
        assert!(err.to_string().contains("IO error"));
        assert_eq!(err.category(), "An unexpected error occurred");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), HdtpError> {
            let _file = std::fs::File::open("/nonexistent/path/file.dds")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, HdtpError::Io(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_directories_lists_every_name() {
        let error = HdtpError::MissingDirectories(vec![
            "03_Valius".to_string(),
            "05_Lucid".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "Missing required directories: 03_Valius, 05_Lucid"
        );
        assert!(error.is_validation_error());
        assert!(error.is_not_found());
        assert_eq!(error.category(), "File not found error");
    }

    #[test]
    fn test_base_not_found() {
        let error = HdtpError::BaseNotFound(PathBuf::from("/mods/hdtp"));
        assert!(error.to_string().contains("Base path does not exist"));
        assert!(error.to_string().contains("/mods/hdtp"));
        assert!(error.is_validation_error());
        assert_eq!(error.hint(), Some("Please check the paths and try again."));
    }

    #[test]
    fn test_at_path_maps_permission_denied() {
        let path = Path::new("/protected/Tires01_d.DDS");
        let error = HdtpError::at_path(path, IoError::new(ErrorKind::PermissionDenied, "nope"));

        assert!(matches!(error, HdtpError::PermissionDenied { .. }));
        assert!(error.to_string().contains("Tires01_d.DDS"));
        assert!(error.is_permission_error());
        assert_eq!(error.category(), "Permission error");
    }

    #[test]
    fn test_at_path_names_missing_path() {
        let path = Path::new("/gone/source");
        let error = HdtpError::at_path(path, IoError::new(ErrorKind::NotFound, "missing"));

        assert!(error.is_not_found());
        assert!(error.to_string().contains("/gone/source"));
    }

    #[test]
    fn test_subprocess_errors() {
        let failed = HdtpError::SubprocessFailed {
            program: "robocopy".to_string(),
            code: 16,
            details: "ERROR : Invalid Parameter".to_string(),
        };
        assert!(failed.to_string().contains("exit code 16"));
        assert!(failed.is_subprocess_error());

        let launch = HdtpError::SubprocessLaunch {
            program: "robocopy".to_string(),
            source: IoError::new(ErrorKind::NotFound, "program not found"),
        };
        assert!(launch.to_string().contains("Failed to launch robocopy"));
        assert_eq!(launch.category(), "Subprocess error");
    }

    #[test]
    fn test_interrupted() {
        let error = HdtpError::Interrupted;
        assert_eq!(error.to_string(), "Operation cancelled by user");
        assert!(!error.is_validation_error());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), HdtpError> {
            Err(HdtpError::Config("empty base path".to_string()))
        }

        fn outer_function() -> Result<(), HdtpError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(matches!(result.unwrap_err(), HdtpError::Config(_)));
    }
}
