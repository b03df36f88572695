//! RON configuration for the brainrot manager

use brainrot_catalogue::{CataloguePaths, CATALOGUE_FILE, MUTATIONS_FILE, TRAITS_FILE};
use brainrot_store::BASES_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the JSON documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory holding the image assets
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Document file names inside `data_dir`
    #[serde(default)]
    pub files: FileNames,
    /// Image locations inside `images_dir`
    #[serde(default)]
    pub images: ImageNames,
    /// Prefix of every navigation URL
    #[serde(default = "default_plugin_url")]
    pub plugin_url: String,
    /// Order of the brainrots listed in a base
    #[serde(default)]
    pub sort: SortOrder,
    /// Year shown for entries without a release date
    #[serde(default = "default_year")]
    pub default_year: i32,
}

/// File names of the JSON documents
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileNames {
    #[serde(default = "default_catalogue_file")]
    pub catalogue: String,
    #[serde(default = "default_traits_file")]
    pub traits: String,
    #[serde(default = "default_mutations_file")]
    pub mutations: String,
    #[serde(default = "default_bases_file")]
    pub bases: String,
}

fn default_catalogue_file() -> String {
    CATALOGUE_FILE.to_string()
}

fn default_traits_file() -> String {
    TRAITS_FILE.to_string()
}

fn default_mutations_file() -> String {
    MUTATIONS_FILE.to_string()
}

fn default_bases_file() -> String {
    BASES_FILE.to_string()
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            catalogue: default_catalogue_file(),
            traits: default_traits_file(),
            mutations: default_mutations_file(),
            bases: default_bases_file(),
        }
    }
}

/// Image folders and special images
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImageNames {
    /// Folder of brainrot images
    #[serde(default = "default_brainrots_dir")]
    pub brainrots: String,
    /// Folder of trait images
    #[serde(default = "default_traits_dir")]
    pub traits: String,
    /// Artwork shown on every base
    #[serde(default = "default_base_fanart")]
    pub base_fanart: String,
    /// Icon used when an image is missing
    #[serde(default = "default_fallback_icon")]
    pub fallback_icon: String,
}

fn default_brainrots_dir() -> String {
    "Brainrots".to_string()
}

fn default_traits_dir() -> String {
    "Traits".to_string()
}

fn default_base_fanart() -> String {
    "Base_Fanart.png".to_string()
}

fn default_fallback_icon() -> String {
    "DefaultFolder.png".to_string()
}

impl Default for ImageNames {
    fn default() -> Self {
        Self {
            brainrots: default_brainrots_dir(),
            traits: default_traits_dir(),
            base_fanart: default_base_fanart(),
            fallback_icon: default_fallback_icon(),
        }
    }
}

/// Order of brainrots inside a base
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum SortOrder {
    /// Order in which they were added (default)
    #[default]
    Insertion,
    /// Highest effective income first
    IncomeDesc,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("resources").join("data")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("resources").join("images")
}

fn default_plugin_url() -> String {
    "plugin://plugin.program.brainrot/".to_string()
}

fn default_year() -> i32 {
    2025
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            images_dir: default_images_dir(),
            files: FileNames::default(),
            images: ImageNames::default(),
            plugin_url: default_plugin_url(),
            sort: SortOrder::default(),
            default_year: default_year(),
        }
    }
}

impl Config {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse configuration from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    /// A default configuration rooted at one directory
    ///
    /// Documents live in `<root>/data`, images in `<root>/images`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_dir: root.join("data"),
            images_dir: root.join("images"),
            ..Self::default()
        }
    }

    /// Paths of the reference documents
    pub fn catalogue_paths(&self) -> CataloguePaths {
        CataloguePaths {
            creatures: self.data_dir.join(&self.files.catalogue),
            traits: self.data_dir.join(&self.files.traits),
            mutations: self.data_dir.join(&self.files.mutations),
        }
    }

    /// Path of the bases document
    pub fn bases_path(&self) -> PathBuf {
        self.data_dir.join(&self.files.bases)
    }

    /// Path of a brainrot image
    pub fn brainrot_image(&self, image: &str) -> PathBuf {
        self.images_dir.join(&self.images.brainrots).join(image)
    }

    /// Path of a trait image
    pub fn trait_image(&self, image: &str) -> PathBuf {
        self.images_dir.join(&self.images.traits).join(image)
    }

    /// Path of the base artwork
    pub fn base_fanart(&self) -> PathBuf {
        self.images_dir.join(&self.images.base_fanart)
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
