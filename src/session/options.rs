use crate::config::{SessionConfig, SketchCompression, SketchStorageMode};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES: u64 = 100 * 1024; // 100 KiB

/// Compression preference for sketch files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Always write plain JSON.
    Off,
    /// Always write gzip-compressed JSON.
    On,
    /// Write gzip when payload exceeds the configured threshold.
    Auto,
}

/// Runtime options derived from configuration for sketch persistence.
#[derive(Debug, Clone)]
pub struct SketchOptions {
    pub base_dir: PathBuf,
    pub enabled: bool,
    pub max_marks: usize,
    pub max_file_size_bytes: u64,
    pub compression: CompressionMode,
    pub auto_compress_threshold_bytes: u64,
    pub backup_retention: usize,
}

impl SketchOptions {
    /// Creates a basic options struct with sensible defaults. Intended
    /// mainly for tests.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            enabled: true,
            max_marks: 10_000,
            max_file_size_bytes: 10 * 1024 * 1024,
            compression: CompressionMode::Auto,
            auto_compress_threshold_bytes: DEFAULT_AUTO_COMPRESS_THRESHOLD_BYTES,
            backup_retention: 1,
        }
    }

    pub fn sketch_file_path(&self) -> PathBuf {
        self.base_dir.join("sketch.json")
    }

    pub fn backup_file_path(&self) -> PathBuf {
        self.base_dir.join("sketch.json.bak")
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.base_dir.join("sketch.lock")
    }
}

/// Build runtime sketch options from configuration values.
pub fn options_from_config(session_cfg: &SessionConfig, config_dir: &Path) -> Result<SketchOptions> {
    let base_dir = match session_cfg.storage {
        SketchStorageMode::Auto => {
            let root = dirs::data_dir().unwrap_or_else(|| config_dir.to_path_buf());
            root.join("sketchpad")
        }
        SketchStorageMode::Config => config_dir.to_path_buf(),
        SketchStorageMode::Custom => {
            let raw = session_cfg.custom_directory.as_ref().ok_or_else(|| {
                anyhow!("session.custom_directory must be set when storage = \"custom\"")
            })?;
            let expanded = expand_tilde(raw);
            if expanded.as_os_str().is_empty() {
                return Err(anyhow!("session.custom_directory resolved to an empty path"));
            }
            expanded
        }
    };

    let mut options = SketchOptions::new(base_dir);
    options.enabled = session_cfg.enabled;
    options.max_marks = session_cfg.max_marks;
    options.max_file_size_bytes = session_cfg
        .max_file_size_mb
        .saturating_mul(1024 * 1024)
        .max(1);
    options.auto_compress_threshold_bytes = session_cfg
        .auto_compress_threshold_kb
        .saturating_mul(1024)
        .max(1);
    options.compression = match session_cfg.compress {
        SketchCompression::Auto => CompressionMode::Auto,
        SketchCompression::On => CompressionMode::On,
        SketchCompression::Off => CompressionMode::Off,
    };
    options.backup_retention = session_cfg.backup_retention;

    Ok(options)
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    #[test]
    fn custom_storage_requires_a_directory() {
        let cfg = SessionConfig {
            storage: SketchStorageMode::Custom,
            custom_directory: None,
            ..SessionConfig::default()
        };
        assert!(options_from_config(&cfg, Path::new("/tmp/cfg")).is_err());
    }

    #[test]
    fn config_storage_uses_the_config_dir() {
        let cfg = SessionConfig {
            storage: SketchStorageMode::Config,
            ..SessionConfig::default()
        };
        let options = options_from_config(&cfg, Path::new("/tmp/cfg")).unwrap();
        assert_eq!(options.base_dir, PathBuf::from("/tmp/cfg"));
        assert_eq!(options.sketch_file_path(), PathBuf::from("/tmp/cfg/sketch.json"));
    }

    #[test]
    fn size_limits_convert_to_bytes() {
        let cfg = SessionConfig {
            storage: SketchStorageMode::Config,
            max_file_size_mb: 2,
            auto_compress_threshold_kb: 50,
            ..SessionConfig::default()
        };
        let options = options_from_config(&cfg, Path::new("/tmp/cfg")).unwrap();
        assert_eq!(options.max_file_size_bytes, 2 * 1024 * 1024);
        assert_eq!(options.auto_compress_threshold_bytes, 50 * 1024);
    }
}
