use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            default_language: default_language(),
        }
    }
}

fn default_site_name() -> String {
    "Vitrine Digital".to_owned()
}

fn default_language() -> String {
    "pt".to_owned()
}

/// Channels shown next to the form, and the timings of the simulated submission.
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_contact_email")]
    pub email: String,
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_office_hours")]
    pub office_hours: String,
    #[serde(default = "default_map_embed_url")]
    pub map_embed_url: String,
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    #[serde(default = "default_status_reset_ms")]
    pub status_reset_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
            whatsapp: default_whatsapp(),
            phone: default_phone(),
            address: default_address(),
            office_hours: default_office_hours(),
            map_embed_url: default_map_embed_url(),
            simulated_latency_ms: default_simulated_latency_ms(),
            status_reset_ms: default_status_reset_ms(),
        }
    }
}

fn default_contact_email() -> String {
    "contato@vitrine.dev".to_owned()
}

fn default_whatsapp() -> String {
    "+55 11 99876-5432".to_owned()
}

fn default_phone() -> String {
    "+55 11 4002-8922".to_owned()
}

fn default_address() -> String {
    "Av. Paulista, 1000 - Bela Vista, São Paulo - SP".to_owned()
}

fn default_office_hours() -> String {
    "Seg-Sex, 9h-18h".to_owned()
}

fn default_map_embed_url() -> String {
    "https://www.google.com/maps?q=Av.+Paulista,+1000,+S%C3%A3o+Paulo&output=embed".to_owned()
}

fn default_simulated_latency_ms() -> u64 {
    1500
}

fn default_status_reset_ms() -> u64 {
    5000
}

impl ContactConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn status_reset(&self) -> Duration {
        Duration::from_millis(self.status_reset_ms)
    }

    pub fn whatsapp_digits(&self) -> String {
        self.whatsapp.chars().filter(char::is_ascii_digit).collect()
    }

    /// `wa.me` deep link opening a chat prefilled with `text`.
    pub fn whatsapp_link(&self, text: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp_digits(),
            urlencoding::encode(text)
        )
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_link(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();

        format!("tel:+{digits}")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VITRINE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VITRINE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_owned());
        }
        if !crate::language::is_supported(&self.site.default_language) {
            return Err(format!(
                "Unsupported default language `{}`, expected one of {:?}",
                self.site.default_language,
                crate::language::SUPPORTED_LANGUAGES
            ));
        }
        if !self.contact.email.validate_email() {
            return Err(format!("Invalid contact email `{}`", self.contact.email));
        }
        if self.contact.whatsapp_digits().is_empty() {
            return Err("WhatsApp number must contain digits".to_owned());
        }
        Ok(())
    }
}
