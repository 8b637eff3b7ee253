use crate::errors::{AppError, AppResult};
use crate::models::schedule::{Schedule, ScheduleEntry};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub roster: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_note_separator")]
    pub note_separator: String,
    #[serde(default = "crate::models::schedule::standard_entries")]
    pub schedule: Vec<ScheduleEntry>,
}

fn default_utc_offset() -> String {
    "-03:00".to_string()
}
fn default_note_separator() -> String {
    " | ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            roster: Self::roster_file().to_string_lossy().to_string(),
            utc_offset: default_utc_offset(),
            note_separator: default_note_separator(),
            schedule: crate::models::schedule::standard_entries(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// Return the full path of the employee roster
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("roster.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse the configured UTC offset into a usable `FixedOffset`.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        self.utc_offset.parse::<FixedOffset>().map_err(|_| {
            AppError::Config(format!(
                "Invalid utc_offset '{}'. Use the form +HH:MM or -HH:MM.",
                self.utc_offset
            ))
        })
    }

    /// Validate the configured schedule entries and build the schedule.
    pub fn schedule(&self) -> AppResult<Schedule> {
        Schedule::new(self.schedule.clone())
    }

    /// Initialize configuration, database and roster files.
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        // Seed an empty roster so employee lookups have a file to read
        if !is_test {
            let roster_path = PathBuf::from(&config.roster);
            if !roster_path.exists() {
                fs::write(&roster_path, "{}\n")?;
                println!("✅ Roster:      {:?}", roster_path);
            }
        }

        Ok(db_path)
    }
}
