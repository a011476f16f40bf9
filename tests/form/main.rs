mod helpers;
mod notifications;
mod submission;
