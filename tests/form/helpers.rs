use dreamcity_contact::ContactForm;
use dreamcity_contact::domain::{Field, Language};
use dreamcity_contact::get_configuration;
use dreamcity_contact::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(300);
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(200);

pub struct TestForm {
    pub form: ContactForm,
    pub email_server: MockServer,
}

impl TestForm {
    pub fn fill(&self, name: &str, email: &str, phone: &str, message: &str) {
        self.form.set_field(Field::Name, name);
        self.form.set_field(Field::Email, email);
        self.form.set_field(Field::Phone, phone);
        self.form.set_field(Field::Message, message);
    }

    pub fn fill_valid(&self) {
        self.fill(
            "Ursula Le Guin",
            "ursula_le_guin@gmail.com",
            "",
            "I am looking for a three-room flat in Ružinov, could you call me back?",
        );
    }

    pub async fn provider_answers(&self, status: u16) {
        Mock::given(path("/api/v1.0/email/send"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.email_server)
            .await;
    }

    /// Bodies of every request the provider received.
    pub async fn sent_requests(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Invalid send body"))
            .collect()
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to set the tracing subscriber");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to set the tracing subscriber");
    }
});

pub async fn spawn_form(language: Language) -> TestForm {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout = Duration::from_secs(2);
        c.application.notification_timeout = NOTIFICATION_TIMEOUT;
        c.application.status_reset_delay = STATUS_RESET_DELAY;
        c
    };

    let email_client = configuration
        .email_client
        .client()
        .expect("Failed to build the email client.");
    let mut settings = configuration.form_settings();
    settings.language = language;

    TestForm {
        form: ContactForm::from_settings(email_client, settings),
        email_server,
    }
}
