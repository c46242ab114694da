use super::defaults::profile_from_env;
use super::types::Config;
use crate::debug_println;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the default location, warning and falling back to defaults on error
    pub fn load() -> Config {
        Self::load_or_default(Config::get_config_path())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
        Config::load_from(path).unwrap_or_else(|e| {
            eprintln!("Warning: failed to load config, using defaults: {}", e);
            Config::default()
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_path<P: AsRef<Path>>(
        config: &Config,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        Self::load_from(Self::get_config_path())
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = path.as_ref();
        debug_println!("config: reading {}", config_path.display());

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let mut config = ConfigLoader::load_from_path(config_path)?;
        if let Some(profile) = profile_from_env() {
            config.profile = profile;
        }

        debug_println!("config: profile {}", config.profile);
        Ok(config)
    }

    /// Save configuration to default location
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        ConfigLoader::save_to_path(self, Self::get_config_path())
    }

    /// Get the default config file path (~/.petpass/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".petpass").join("config.toml")
        } else {
            PathBuf::from(".petpass/config.toml")
        }
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            Config::default().save()?;
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.survey.max_pet_count == 0 {
            return Err("survey.max_pet_count must be at least 1".into());
        }

        self.resolve_profile().validate()?;
        Ok(())
    }

    /// Print configuration as TOML, including the resolved estimator profile
    pub fn print(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);

        let profile = toml::to_string_pretty(&self.resolve_profile())?;
        println!("# Resolved {} profile", self.profile);
        println!("{}", profile);
        Ok(())
    }
}
