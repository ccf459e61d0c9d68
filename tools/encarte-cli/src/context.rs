//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use encarte_core::prelude::*;

use crate::config::{default_data_dir, CliConfig, StorageBackend, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: CliConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => {
                let mut skipped = Vec::new();
                let found = Self::find_config(&cwd, &mut skipped);
                for (path, e) in &skipped {
                    output.warn(&format!("Skipping unreadable config {}: {:#}", path.display(), e));
                }
                match found {
                    Some((config, path)) => (config, Some(path)),
                    None => (CliConfig::default(), None),
                }
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree. Files that fail to load are
    /// collected in `skipped` and the search goes on.
    fn find_config(
        start: &Path,
        skipped: &mut Vec<(PathBuf, anyhow::Error)>,
    ) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let path = current.join(name);
                if path.exists() {
                    match CliConfig::load(&path) {
                        Ok(config) => return Some((config, path)),
                        Err(e) => skipped.push((path, e)),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Location of the stored flyer for file-backed stores.
    pub fn storage_path(&self) -> PathBuf {
        match &self.config.storage.path {
            Some(path) => self.resolve_path(path),
            None => default_data_dir().join(self.config.storage.backend.default_file_name()),
        }
    }

    /// Open the configured store. A store that cannot be opened degrades to
    /// an in-memory session.
    pub fn repository(&self) -> FlyerRepository {
        match self.config.storage.backend {
            StorageBackend::Sqlite => match SqliteStore::open(self.storage_path()) {
                Ok(store) => FlyerRepository::new(store),
                Err(e) => {
                    tracing::error!(error = %e, "could not open database");
                    self.output
                        .warn(&format!("Could not open database ({}); changes will not be saved", e));
                    FlyerRepository::new(MemoryStore::default())
                }
            },
            StorageBackend::File => FlyerRepository::new(FileStore::new(self.storage_path())),
            StorageBackend::Memory => FlyerRepository::new(MemoryStore::default()),
        }
    }

    /// Start an editing session on the stored flyer.
    pub fn editor(&self) -> FlyerEditor {
        let repository = self.repository();
        self.output.debug(&format!("Using store {}", repository.location()));
        FlyerEditor::open(repository)
    }

    /// Directory for exported files.
    pub fn export_dir(&self) -> PathBuf {
        match &self.config.export.dir {
            Some(dir) => self.resolve_path(dir),
            None => self.cwd.clone(),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_in(cwd: &Path, config: CliConfig) -> Context {
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".encarte.toml"),
            "[storage]\nbackend = \"memory\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut skipped = Vec::new();
        let (config, path) = Context::find_config(&nested, &mut skipped).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(path, dir.path().join(".encarte.toml"));
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_find_config_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("encarte.toml"), "[storage]\nbackend = \"file\"\n").unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("encarte.toml"), "[storage\n").unwrap();

        let mut skipped = Vec::new();
        let (config, path) = Context::find_config(&nested, &mut skipped).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(path, dir.path().join("encarte.toml"));
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].0, nested.join("encarte.toml"));
        assert!(format!("{:#}", skipped[0].1).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_storage_path_relative_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.storage.path = Some("data/flyer.db".to_string());

        let ctx = context_in(dir.path(), config);
        assert_eq!(ctx.storage_path(), dir.path().join("data/flyer.db"));
    }

    #[test]
    fn test_file_backend_session_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.path = Some("encarte.json".to_string());
        let ctx = context_in(dir.path(), config);

        ctx.editor().set_store_name("Mercado Sol");
        assert_eq!(ctx.editor().flyer().store_name, "Mercado Sol");
    }

    #[test]
    fn test_unopenable_database_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the database file should be
        std::fs::create_dir_all(dir.path().join("blocked.db")).unwrap();
        let mut config = CliConfig::default();
        config.storage.path = Some("blocked.db".to_string());
        let ctx = context_in(dir.path(), config);

        assert_eq!(ctx.repository().location(), "memory");
    }
}
