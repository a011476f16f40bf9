use crate::contact_form::FormSettings;
use crate::domain::{ContactEmail, Language};
use crate::email_client::{EmailClient, EmailClientError};
use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub default_language: Language,
    pub recipient_email: ContactEmail,
    #[serde(
        rename = "notification_timeout_millis",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub notification_timeout: Duration,
    #[serde(
        rename = "status_reset_millis",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub status_reset_delay: Duration,
}

#[derive(serde::Deserialize, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: SecretBox<String>,
    #[serde(default)]
    pub access_token: Option<SecretBox<String>>,
    #[serde(
        rename = "timeout_millis",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub timeout: Duration,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, EmailClientError> {
        let public_key = SecretString::from(self.public_key.expose_secret().clone());
        let access_token = self
            .access_token
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().clone()));
        EmailClient::new(&self.base_url, public_key, access_token, self.timeout)
    }
}

impl Settings {
    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            service_id: self.email_client.service_id.clone(),
            template_id: self.email_client.template_id.clone(),
            recipient: self.application.recipient_email.clone(),
            language: self.application.default_language,
            notification_timeout: self.application.notification_timeout,
            status_reset_delay: self.application.status_reset_delay,
        }
    }
}

fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let millis: u64 = deserialize_number_from_string(deserializer)?;
    Ok(Duration::from_millis(millis))
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!("{} is not a valid environment", other)),
        }
    }
}

/// Reads `configuration/base.yaml`, the file for `APP_ENVIRONMENT` and
/// `APP_`-prefixed environment variables, in that order of precedence.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use claims::{assert_err, assert_ok};

    #[test]
    fn environments_are_parsed_case_insensitively() {
        assert_ok!(Environment::try_from("Production".to_string()));
        assert_ok!(Environment::try_from("local".to_string()));
    }

    #[test]
    fn unknown_environments_are_rejected() {
        assert_err!(Environment::try_from("staging".to_string()));
    }
}
