//! Common test utilities for Graft integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project root for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the symfony marker directories
    pub fn make_symfony(&self) {
        std::fs::create_dir_all(self.path.join("config/packages"))
            .expect("Failed to create config/packages");
        std::fs::create_dir_all(self.path.join("public")).expect("Failed to create public");
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a package install directory under vendor/
    pub fn create_package(&self, name: &str) -> PathBuf {
        let package_path = self.path.join("vendor").join(name);
        std::fs::create_dir_all(&package_path).expect("Failed to create package directory");
        package_path
    }

    /// Write a payload file for a package and project type
    pub fn write_payload(&self, name: &str, project_type: &str, relative: &str, content: &str) {
        let payload_path = self
            .path
            .join("vendor")
            .join(name)
            .join(".install")
            .join(project_type)
            .join(relative);
        if let Some(parent) = payload_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create payload directory");
        }
        std::fs::write(&payload_path, content).expect("Failed to write payload file");
    }

    /// Create an empty payload root for a package and project type
    pub fn create_payload_root(&self, name: &str, project_type: &str) {
        std::fs::create_dir_all(
            self.path
                .join("vendor")
                .join(name)
                .join(".install")
                .join(project_type),
        )
        .expect("Failed to create payload root");
    }

    /// Write packages.json listing the given package names under vendor/
    pub fn register_packages(&self, names: &[&str]) {
        let entries: Vec<String> = names
            .iter()
            .map(|name| format!(r#"{{"name": "{name}", "path": "vendor/{name}"}}"#))
            .collect();
        self.write_file("packages.json", &format!("[{}]", entries.join(", ")));
    }
}
