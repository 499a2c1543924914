use std::env;
use std::str::FromStr;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which side effects a confirmed booking triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationChannel {
    Webhook,
    WhatsApp,
    Both,
}

impl ConfirmationChannel {
    pub fn uses_webhook(self) -> bool {
        matches!(self, Self::Webhook | Self::Both)
    }

    pub fn uses_whatsapp(self) -> bool {
        matches!(self, Self::WhatsApp | Self::Both)
    }
}

impl FromStr for ConfirmationChannel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webhook" => Ok(Self::Webhook),
            "whatsapp" => Ok(Self::WhatsApp),
            "both" => Ok(Self::Both),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub booking_webhook_url: Option<String>,
    pub confirmation_channel: ConfirmationChannel,
    pub whatsapp_number: String,
    pub salon_timezone: Tz,
    pub resend_api_url: String,
    pub resend_api_key: String,
    pub mail_from: String,
    pub send_confirmation_email: bool,
    pub session_ttl_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            booking_webhook_url: None,
            confirmation_channel: ConfirmationChannel::Webhook,
            whatsapp_number: "(11) 3000-0000".to_string(),
            salon_timezone: chrono_tz::America::Sao_Paulo,
            resend_api_url: "https://api.resend.com/emails".to_string(),
            resend_api_key: String::new(),
            mail_from: "Salão de Beleza <onboarding@resend.dev>".to_string(),
            send_confirmation_email: false,
            session_ttl_minutes: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: parse_var("PORT", defaults.port)?,
            booking_webhook_url: env::var("BOOKING_WEBHOOK_URL").ok().filter(|url| !url.trim().is_empty()),
            confirmation_channel: parse_var("CONFIRMATION_CHANNEL", defaults.confirmation_channel)?,
            whatsapp_number: env::var("WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            salon_timezone: parse_var("SALON_TIMEZONE", defaults.salon_timezone)?,
            resend_api_url: env::var("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
            resend_api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
            mail_from: env::var("MAIL_FROM").unwrap_or(defaults.mail_from),
            send_confirmation_email: parse_var("SEND_CONFIRMATION_EMAIL", defaults.send_confirmation_email)?,
            session_ttl_minutes: parse_session_ttl(env::var("SESSION_TTL_MINUTES").ok(), defaults.session_ttl_minutes)?,
        })
    }
}

/// Idle sessions live between one minute and one week.
pub const SESSION_TTL_RANGE: std::ops::RangeInclusive<u32> = 1..=10_080;

fn parse_session_ttl(raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };

    match value.trim().parse::<u32>() {
        Ok(minutes) if SESSION_TTL_RANGE.contains(&minutes) => Ok(minutes),
        _ => Err(ConfigError::InvalidValue { name: "SESSION_TTL_MINUTES", value }),
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
