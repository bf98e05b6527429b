use super::ShimConfig;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository config files, lowest priority first
const REPO_CONFIG_FILES: &[&str] = &["hookshim.toml", ".hookshim.toml"];

pub struct ShimConfigLoader {
    figment: Figment,
}

impl ShimConfigLoader {
    pub fn new() -> Self {
        Self::with_custom_config(None)
    }

    pub fn with_custom_config(custom_config: Option<&str>) -> Self {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository files, not the defaults
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment.merge(Toml::file(Self::user_config_path()));
            for file in REPO_CONFIG_FILES {
                figment = figment.merge(Toml::file(file));
            }
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("HOOKSHIM_").split("__"));

        Self { figment }
    }

    pub fn load(&self) -> Result<ShimConfig> {
        self.figment
            .extract()
            .context("Failed to load hookshim configuration")
    }

    /// Get a nested value, e.g. `tools.clang-tidy.defaults`
    pub fn get_vec(&self, path: &str) -> Result<Vec<String>> {
        Ok(self.figment.extract_inner(path)?)
    }

    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.figment.extract_inner(path)?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/hookshim/config.toml", home),
            Err(_) => "~/.config/hookshim/config.toml".to_string(),
        }
    }
}

impl Default for ShimConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
