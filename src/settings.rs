//! Configurable defaults for the [`crate::validator::Validator`] facade.
//!
//! Sources, lowest precedence first: built-in defaults, an optional file in
//! any format `config` recognizes by extension, then `SEMVAL_*` environment
//! variables (`SEMVAL_DATE_FORMAT`, `SEMVAL_IP_FAMILY`, ...).

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::{DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT};
use crate::error::Result;
use crate::ip::{IpFamily, IpFlags};
use crate::pattern::Pattern;
use crate::url::UrlFlags;

pub const ENV_PREFIX: &str = "SEMVAL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub date_format: String,
    pub time_format: String,
    pub date_time_format: String,
    pub ip_family: IpFamily,
    pub no_private_range: bool,
    pub no_reserved_range: bool,
    pub require_path: bool,
    pub require_query: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: String::from(DATE_FORMAT),
            time_format: String::from(TIME_FORMAT),
            date_time_format: String::from(DATE_TIME_FORMAT),
            ip_family: IpFamily::Any,
            no_private_range: false,
            no_reserved_range: false,
            require_path: false,
            require_query: false,
        }
    }
}

impl Settings {
    /// Load settings, reading `path` if given. A named file that does not
    /// exist is an error, and so is a format pattern that does not compile.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        settings.check()?;
        info!(
            file = ?path,
            date_format = %settings.date_format,
            time_format = %settings.time_format,
            date_time_format = %settings.date_time_format,
            ip_family = ?settings.ip_family,
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn ip_flags(&self) -> IpFlags {
        IpFlags {
            family: self.ip_family,
            no_private_range: self.no_private_range,
            no_reserved_range: self.no_reserved_range,
        }
    }

    pub fn url_flags(&self) -> UrlFlags {
        UrlFlags { require_path: self.require_path, require_query: self.require_query }
    }

    fn check(&self) -> Result<()> {
        for format in [&self.date_format, &self.time_format, &self.date_time_format] {
            Pattern::compile(format)?;
        }
        Ok(())
    }
}
