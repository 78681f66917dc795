//! Temporary declaration directory and manifest paths

use std::fs;

use tempfile::TempDir;

use dep_pin::config::SyncConfig;

pub struct TestWorkspace {
    _root: TempDir,
    pub config: SyncConfig,
}

impl TestWorkspace {
    /// Creates `<tmp>/kvrocks/cmake` with no declarations
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let config = SyncConfig::from_root(root.path());
        fs::create_dir_all(&config.declarations_dir).unwrap();
        Self {
            _root: root,
            config,
        }
    }

    pub fn declare(&self, file_name: &str, content: &str) -> &Self {
        fs::write(self.config.declarations_dir.join(file_name), content).unwrap();
        self
    }

    pub fn dep_json(&self) -> String {
        fs::read_to_string(&self.config.declaration_output_path).unwrap()
    }

    pub fn sha_json(&self) -> String {
        fs::read_to_string(&self.config.resolved_output_path).unwrap()
    }

    pub fn write_sha_json(&self, content: &str) {
        fs::write(&self.config.resolved_output_path, content).unwrap();
    }
}
