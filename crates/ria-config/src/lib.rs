//! # ria-config
//!
//! Settings for reaching an Azure DevOps project, loaded with figment.
//!
//! Later sources override earlier ones:
//!
//! | Source | Example |
//! |---|---|
//! | built-in defaults | `api_version = "7.1"` |
//! | `~/.config/ria/config.toml` | per-user organization and PAT |
//! | `.ria/config.toml` | per-checkout project |
//! | `RIA_<SECTION>__<KEY>` | `RIA_DEVOPS__PAT=...` |
//!
//! ```no_run
//! let config = ria_config::RiaConfig::load_with_dotenv()?;
//! config.devops.validate()?;
//! println!("{}", config.devops.project_url());
//! # Ok::<(), ria_config::ConfigError>(())
//! ```

mod devops;
mod error;
mod general;

pub use devops::DevOpsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-checkout config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".ria/config.toml";

const ENV_PREFIX: &str = "RIA_";

/// Every configuration section. Absent sections take their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RiaConfig {
    pub devops: DevOpsConfig,
    pub general: GeneralConfig,
}

impl RiaConfig {
    /// Merge every source. `.env` is not read here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// [`Self::load`] after exporting a `.env` file from the working
    /// directory, when one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Provider chain behind [`Self::load`], exposed for tests.
    #[must_use]
    pub fn figment() -> Figment {
        let files = [Self::user_config_path(), Some(PathBuf::from(PROJECT_CONFIG))];
        files
            .into_iter()
            .flatten()
            .filter(|path| path.is_file())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ria").join("config.toml"))
    }
}
