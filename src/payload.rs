//! Payload layout resolution for installed packages
//!
//! A package opts into post-install processing by shipping an `.install/`
//! directory. Inside it, one subtree per project type holds the well-known
//! snippet files plus any template files to copy verbatim.

use std::path::{Path, PathBuf};

/// Directory under a package's install path holding its payloads
pub const PAYLOAD_DIR: &str = ".install";

/// Env snippet merged into the project's `.env`
pub const ENV_SNIPPET: &str = "env.txt";

/// Ignore snippet merged into the project's `.gitignore`
pub const IGNORE_SNIPPET: &str = "gitignore.txt";

/// Note printed verbatim after installation
pub const POST_INSTALL_NOTE: &str = "post-install.txt";

const MANIFEST_CANDIDATES: [&str; 2] = ["manifest.json", "manifest.yaml"];

/// Resolved payload subtree for one (package, project type) pair
///
/// Pure path computation; existence is only checked on demand.
#[derive(Debug, Clone)]
pub struct Payload {
    root: PathBuf,
}

impl Payload {
    /// Locate the payload for a project type under a package's install path
    pub fn resolve(install_path: &Path, project_type: &str) -> Self {
        Self {
            root: install_path.join(PAYLOAD_DIR).join(project_type),
        }
    }

    /// Whether the package ships a payload for this project type
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_snippet(&self) -> PathBuf {
        self.root.join(ENV_SNIPPET)
    }

    pub fn ignore_snippet(&self) -> PathBuf {
        self.root.join(IGNORE_SNIPPET)
    }

    pub fn post_install_note(&self) -> PathBuf {
        self.root.join(POST_INSTALL_NOTE)
    }

    /// Path of the package manifest, when one exists (json wins over yaml)
    pub fn manifest(&self) -> Option<PathBuf> {
        MANIFEST_CANDIDATES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_builds_expected_layout() {
        let payload = Payload::resolve(Path::new("/vendor/acme/widget"), "symfony");

        assert_eq!(
            payload.root(),
            Path::new("/vendor/acme/widget/.install/symfony")
        );
        assert_eq!(
            payload.env_snippet(),
            Path::new("/vendor/acme/widget/.install/symfony/env.txt")
        );
        assert_eq!(
            payload.ignore_snippet(),
            Path::new("/vendor/acme/widget/.install/symfony/gitignore.txt")
        );
        assert_eq!(
            payload.post_install_note(),
            Path::new("/vendor/acme/widget/.install/symfony/post-install.txt")
        );
    }

    #[test]
    fn test_exists_reflects_payload_root() {
        let temp = TempDir::new().unwrap();
        let install_path = temp.path().join("vendor/acme/widget");

        let payload = Payload::resolve(&install_path, "symfony");
        assert!(!payload.exists());

        std::fs::create_dir_all(install_path.join(".install/symfony")).unwrap();
        assert!(payload.exists());
    }

    #[test]
    fn test_manifest_absent() {
        let temp = TempDir::new().unwrap();
        let install_path = temp.path().join("vendor/acme/widget");
        std::fs::create_dir_all(install_path.join(".install/symfony")).unwrap();

        let payload = Payload::resolve(&install_path, "symfony");
        assert!(payload.manifest().is_none());
    }

    #[test]
    fn test_manifest_json_preferred_over_yaml() {
        let temp = TempDir::new().unwrap();
        let install_path = temp.path().join("vendor/acme/widget");
        let root = install_path.join(".install/symfony");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("manifest.yaml"), "{}").unwrap();

        let payload = Payload::resolve(&install_path, "symfony");
        assert_eq!(payload.manifest().unwrap(), root.join("manifest.yaml"));

        std::fs::write(root.join("manifest.json"), "{}").unwrap();
        assert_eq!(payload.manifest().unwrap(), root.join("manifest.json"));
    }
}
