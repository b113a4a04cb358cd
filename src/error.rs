//! Error types and handling for Graft
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Graft operations
#[derive(Error, Diagnostic, Debug)]
pub enum GraftError {
    // Project errors
    #[error("Project root not found: {path}")]
    #[diagnostic(
        code(graft::project::root_not_found),
        help("Pass an existing directory with --workspace or run from the project root")
    )]
    ProjectRootNotFound { path: String },

    #[error("Unknown project type: {label}")]
    #[diagnostic(
        code(graft::project::unknown_type),
        help("Known project types: all, symfony")
    )]
    ProjectTypeUnknown { label: String },

    // Package list errors
    #[error("Package list not found: {path}")]
    #[diagnostic(
        code(graft::packages::not_found),
        help("Point --packages at the package list written by your dependency manager")
    )]
    PackageListNotFound { path: String },

    #[error("Failed to parse package list: {path}")]
    #[diagnostic(code(graft::packages::parse_failed))]
    PackageListParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(graft::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(graft::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(graft::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(graft::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy payload entry: {path}")]
    #[diagnostic(code(graft::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(graft::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GraftError {
    fn from(err: std::io::Error) -> Self {
        GraftError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for GraftError {
    fn from(err: serde_yaml::Error) -> Self {
        GraftError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GraftError {
    fn from(err: serde_json::Error) -> Self {
        GraftError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraftError::ProjectRootNotFound {
            path: "/missing".to_string(),
        };
        assert_eq!(err.to_string(), "Project root not found: /missing");
    }

    #[test]
    fn test_error_code() {
        let err = GraftError::ProjectTypeUnknown {
            label: "rails".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("graft::project::unknown_type".to_string())
        );
    }

    #[test]
    fn test_package_list_not_found_error() {
        let err = GraftError::PackageListNotFound {
            path: "packages.json".to_string(),
        };
        assert!(err.to_string().contains("Package list not found"));
        assert!(err.to_string().contains("packages.json"));
    }

    #[test]
    fn test_package_list_parse_failed_error() {
        let err = GraftError::PackageListParseFailed {
            path: "packages.json".to_string(),
            reason: "expected array".to_string(),
        };
        assert!(err.to_string().contains("Failed to parse package list"));
    }

    #[test]
    fn test_config_parse_failed_error() {
        let err = GraftError::ConfigParseFailed {
            path: "graft.yaml".to_string(),
            reason: "invalid YAML".to_string(),
        };
        assert!(err.to_string().contains("Failed to parse configuration file"));
        assert!(err.to_string().contains("graft.yaml"));
    }

    #[test]
    fn test_file_write_failed_error() {
        let err = GraftError::FileWriteFailed {
            path: "/project/.env".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("Failed to write file"));
        assert!(err.to_string().contains("/project/.env"));
    }

    #[test]
    fn test_copy_failed_error() {
        let err = GraftError::CopyFailed {
            path: "config/routes.yaml".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("Failed to copy payload entry"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let graft_err: GraftError = io_err.into();
        assert!(matches!(graft_err, GraftError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let graft_err: GraftError = yaml_err.into();
        assert!(matches!(graft_err, GraftError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "not json";
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str(json_str);
        let json_err = parse_result.unwrap_err();
        let graft_err: GraftError = json_err.into();
        assert!(matches!(graft_err, GraftError::ConfigParseFailed { .. }));
    }
}
