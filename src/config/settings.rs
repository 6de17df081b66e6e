//! Configuration file loading and dataset path resolution.
//!
//! Configuration is an optional JSON file; a missing file simply means
//! defaults. Everything resolves down to a [`Dataset`], the five
//! concrete file paths a query runs against.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::errors::{ConfigError, ConfigResult};

const ORDERS_FILE: &str = "orders.csv";
const ORDER_LINES_FILE: &str = "order_lines.csv";
const COMMISSIONS_FILE: &str = "commissions.csv";
const PRODUCT_PROMOTIONS_FILE: &str = "product_promotions.csv";
const PROMOTIONS_FILE: &str = "promotions.csv";

/// Crate configuration, loaded from an optional JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the five CSV sources. Defaults to the current
    /// directory.
    pub data_dir: Option<PathBuf>,
    /// Per-file name overrides.
    pub files: FileNames,
}

/// File names of the five sources within the data directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileNames {
    pub orders: String,
    pub order_lines: String,
    pub commissions: String,
    pub product_promotions: String,
    pub promotions: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            orders: ORDERS_FILE.to_string(),
            order_lines: ORDER_LINES_FILE.to_string(),
            commissions: COMMISSIONS_FILE.to_string(),
            product_promotions: PRODUCT_PROMOTIONS_FILE.to_string(),
            promotions: PROMOTIONS_FILE.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// file is an error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::read(path, e)),
        };
        serde_json::from_str(&content).map_err(|e| ConfigError::parse(path, e))
    }

    /// Resolves the five source paths. `data_dir_override` wins over
    /// the configured directory.
    pub fn dataset(&self, data_dir_override: Option<&Path>) -> Dataset {
        let dir = data_dir_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        Dataset {
            orders: dir.join(&self.files.orders),
            order_lines: dir.join(&self.files.order_lines),
            commissions: dir.join(&self.files.commissions),
            product_promotions: dir.join(&self.files.product_promotions),
            promotions: dir.join(&self.files.promotions),
        }
    }
}

/// Resolved locations of the five CSV sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub orders: PathBuf,
    pub order_lines: PathBuf,
    pub commissions: PathBuf,
    pub product_promotions: PathBuf,
    pub promotions: PathBuf,
}

impl Dataset {
    /// Dataset with the default file names rooted at `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Config::default().dataset(Some(dir))
    }
}
