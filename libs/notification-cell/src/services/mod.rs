pub mod mailer;
pub mod notifier;
pub mod schedule;
pub mod templates;

pub use mailer::{MailTransport, SmtpMailer};
pub use notifier::NotificationService;
pub use schedule::LocalSchedule;
