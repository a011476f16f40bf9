pub mod catalog;
pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod email_client;
pub mod telemetry;

pub use catalog::{MessageCatalog, MessageKey};
pub use configuration::get_configuration;
pub use contact_form::{ContactForm, FormSettings, Notification, NotificationKind, SubmitError};
pub use email_client::EmailClient;
pub use telemetry::{get_subscriber, init_subscriber};
