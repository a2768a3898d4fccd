use std::collections::HashSet;
use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand(raw)?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    fn validate(&self) -> anyhow::Result<()> {
        self.validate_connection()?;
        self.validate_tags()?;
        self.validate_root_folders()?;
        Ok(())
    }

    fn validate_connection(&self) -> anyhow::Result<()> {
        let scheme = self.connection.url.scheme();
        if scheme != "http" && scheme != "https" {
            anyhow::bail!("connection.url must use http or https, got '{scheme}'");
        }

        if self.connection.api_key.expose_secret().is_empty() {
            anyhow::bail!("connection.api_key must not be empty");
        }

        Ok(())
    }

    fn validate_tags(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for tag in &self.resources.tags {
            if tag.label.trim().is_empty() {
                anyhow::bail!("resources.tags entries must have a non-empty label");
            }

            // Lidarr stores labels lowercase, so two labels differing only
            // in case collide on the server
            if !seen.insert(tag.label.to_ascii_lowercase()) {
                anyhow::bail!("duplicate tag label '{}'", tag.label);
            }
        }

        Ok(())
    }

    fn validate_root_folders(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for folder in &self.resources.root_folders {
            if !Path::new(&folder.path).is_absolute() {
                anyhow::bail!("resources.root_folders path '{}' must be absolute", folder.path);
            }

            if !seen.insert(folder.path.clone()) {
                anyhow::bail!("duplicate root folder path '{}'", folder.path);
            }
        }

        Ok(())
    }
}
