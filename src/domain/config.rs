use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional configuration file inside the working root.
pub const CONFIG_FILE: &str = "labs.toml";

/// Configuration for the student directory.
///
/// Paths are interpreted relative to the working root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The flat file the directory is loaded from and saved to.
    database: PathBuf,

    /// The cumulative report file search results are appended to.
    report: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            report: default_report(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads `labs.toml` from the root, falling back to the defaults.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Using default config: {e}");
            Self::default()
        })
    }

    /// The directory file, resolved against `root`.
    #[must_use]
    pub fn database_path(&self, root: &Path) -> PathBuf {
        root.join(&self.database)
    }

    /// The report file, resolved against `root`.
    #[must_use]
    pub fn report_path(&self, root: &Path) -> PathBuf {
        root.join(&self.report)
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("students_database.txt")
}

fn default_report() -> PathBuf {
    PathBuf::from("output_students.txt")
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_database")]
        database: PathBuf,

        #[serde(default = "default_report")]
        report: PathBuf,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { database, report } => Self { database, report },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            database: config.database,
            report: config.report,
        }
    }
}
