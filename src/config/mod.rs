use crate::errors::{AppError, AppResult};
use crate::models::campaign::CampaignWindow;
use crate::models::{Locale, WeeklySchedule};
use crate::utils::path::expand_tilde;
use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub locale: Locale,
    /// IANA zone name; system local time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default = "default_max_party_size")]
    pub max_party_size: u32,
    #[serde(default = "default_booking_horizon_days")]
    pub booking_horizon_days: u32,
    #[serde(default)]
    pub schedule: WeeklySchedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignWindow>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_max_party_size() -> u32 {
    12
}
fn default_booking_horizon_days() -> u32 {
    90
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            locale: Locale::default(),
            timezone: None,
            max_party_size: default_max_party_size(),
            booking_horizon_days: default_booking_horizon_days(),
            schedule: WeeklySchedule::default(),
            campaign: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtable")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtable")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtable.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtable.sqlite")
    }

    /// Load configuration from the standard location, or defaults if absent.
    ///
    /// A malformed schedule, locale or timezone is fatal: better to refuse to
    /// start than to publish wrong opening hours.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Field checks that serde cannot express. The schedule validates itself.
    pub fn validate(&self) -> AppResult<()> {
        self.tz()?;

        if self.max_party_size == 0 {
            return Err(AppError::Config("max_party_size must be at least 1".into()));
        }
        if self.booking_horizon_days == 0 {
            return Err(AppError::Config(
                "booking_horizon_days must be at least 1".into(),
            ));
        }
        if let Some(c) = &self.campaign
            && let Some(end) = c.ends_at
            && end <= c.starts_at
        {
            return Err(AppError::Config(format!(
                "campaign '{}' ends before it starts",
                c.title
            )));
        }
        Ok(())
    }

    pub fn tz(&self) -> AppResult<Option<Tz>> {
        match &self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| AppError::Config(format!("unknown timezone '{name}'"))),
            None => Ok(None),
        }
    }

    /// Current wall-clock time at the restaurant.
    pub fn local_now(&self) -> AppResult<NaiveDateTime> {
        Ok(match self.tz()? {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        })
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        // Keep an existing, valid configuration; only the DB path changes.
        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
