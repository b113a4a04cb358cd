//! Project type conventions and detection
//!
//! A project type names a payload subtree and lists the marker paths that
//! must all exist under the project root for the type to apply. The `all`
//! type has no markers and matches every project.

use std::path::Path;

use crate::error::{GraftError, Result};

/// Label of the catch-all project type
pub const PROJECT_TYPE_ALL: &str = "all";

/// A named project convention with its required marker paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectType {
    pub label: String,
    pub markers: Vec<String>,
}

impl ProjectType {
    fn new(label: &str, markers: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            markers: markers.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Whether every marker path exists under `project_root`
    pub fn is_compatible(&self, project_root: &Path) -> bool {
        self.markers
            .iter()
            .all(|marker| project_root.join(marker).exists())
    }

    /// Whether this is a specific convention rather than the catch-all
    pub fn is_named(&self) -> bool {
        self.label != PROJECT_TYPE_ALL
    }
}

/// The built-in project type registry, catch-all first
pub fn default_project_types() -> Vec<ProjectType> {
    vec![
        ProjectType::new(PROJECT_TYPE_ALL, &[]),
        ProjectType::new("symfony", &["config/packages", "public"]),
    ]
}

/// Look up a project type by label
pub fn get_project_type(label: &str) -> Option<ProjectType> {
    default_project_types().into_iter().find(|t| t.label == label)
}

/// Named project types whose markers are all present under `project_root`
pub fn detect_project_types(project_root: &Path) -> Vec<ProjectType> {
    default_project_types()
        .into_iter()
        .filter(|t| t.is_named() && t.is_compatible(project_root))
        .collect()
}

/// Resolve the project types to process for one run
///
/// With explicit labels, each must be known. Otherwise the catch-all runs
/// first, followed by every detected named type.
pub fn resolve_project_types(
    project_root: &Path,
    specified: &[String],
) -> Result<Vec<ProjectType>> {
    if specified.is_empty() {
        let mut types = vec![ProjectType::new(PROJECT_TYPE_ALL, &[])];
        types.extend(detect_project_types(project_root));
        return Ok(types);
    }

    specified
        .iter()
        .map(|label| {
            get_project_type(label).ok_or_else(|| GraftError::ProjectTypeUnknown {
                label: label.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_all_type_is_always_compatible() {
        let temp = TempDir::new().unwrap();
        let all = get_project_type(PROJECT_TYPE_ALL).unwrap();

        assert!(!all.is_named());
        assert!(all.is_compatible(temp.path()));
    }

    #[test]
    fn test_symfony_requires_every_marker() {
        let temp = TempDir::new().unwrap();
        let symfony = get_project_type("symfony").unwrap();

        assert!(!symfony.is_compatible(temp.path()));

        std::fs::create_dir_all(temp.path().join("config/packages")).unwrap();
        assert!(!symfony.is_compatible(temp.path()));

        std::fs::create_dir_all(temp.path().join("public")).unwrap();
        assert!(symfony.is_compatible(temp.path()));
    }

    #[test]
    fn test_get_project_type_unknown() {
        assert!(get_project_type("rails").is_none());
    }

    #[test]
    fn test_detect_project_types_empty_root() {
        let temp = TempDir::new().unwrap();
        assert!(detect_project_types(temp.path()).is_empty());
    }

    #[test]
    fn test_detect_project_types_symfony() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("config/packages")).unwrap();
        std::fs::create_dir_all(temp.path().join("public")).unwrap();

        let detected = detect_project_types(temp.path());
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].label, "symfony");
    }

    #[test]
    fn test_resolve_project_types_defaults_to_all_plus_detected() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("config/packages")).unwrap();
        std::fs::create_dir_all(temp.path().join("public")).unwrap();

        let types = resolve_project_types(temp.path(), &[]).unwrap();
        let labels: Vec<&str> = types.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["all", "symfony"]);
    }

    #[test]
    fn test_resolve_project_types_explicit() {
        let temp = TempDir::new().unwrap();
        let types = resolve_project_types(temp.path(), &["symfony".to_string()]).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].label, "symfony");
    }

    #[test]
    fn test_resolve_project_types_unknown_label() {
        let temp = TempDir::new().unwrap();
        let result = resolve_project_types(temp.path(), &["rails".to_string()]);
        assert!(matches!(
            result.unwrap_err(),
            GraftError::ProjectTypeUnknown { .. }
        ));
    }
}
