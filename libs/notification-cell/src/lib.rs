//! # Notification Cell
//!
//! Patient-facing email for consultations and prescriptions.
//!
//! ```text
//! +-----------------------------------------------------+
//! |               Notification Cell                     |
//! +-----------------------------------------------------+
//! |  models.rs      |  Notices, outgoing mail, errors   |
//! |  services/      |                                   |
//! |    mailer.rs    |  MailTransport + SMTP transport   |
//! |    schedule.rs  |  Localized date/offset/converter  |
//! |    templates.rs |  HTML bodies                      |
//! |    notifier.rs  |  Per-endpoint delivery policy     |
//! +-----------------------------------------------------+
//! ```
//!
//! Meeting notifications are best-effort: the meeting already exists, so a
//! failed send is reported as `false` rather than failing the request.
//! Prescriptions are sent with [`DeliveryPolicy::Required`].

pub mod models;
pub mod services;

pub use models::{
    DeliveryPolicy, EmailAttachment, MeetingNotice, NotificationError, OutgoingEmail,
    PrescriptionNotice,
};

pub use services::{LocalSchedule, MailTransport, NotificationService, SmtpMailer};
