use crate::services::schedule::LocalSchedule;

/// Whether a failed send should fail the request that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Log the failure and report `false`.
    BestEffort,
    /// Propagate the failure to the caller.
    Required,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A fully rendered message, independent of the transport that delivers it.
/// The From address belongs to the transport; only the display name travels here.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub sender_name: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Scheduling details for a created or rescheduled consultation.
#[derive(Debug, Clone)]
pub struct MeetingNotice {
    pub to: String,
    pub join_url: String,
    pub schedule: LocalSchedule,
}

#[derive(Debug, Clone)]
pub struct PrescriptionNotice {
    pub to: String,
    pub patient_name: String,
    pub pdf: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Invalid email address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    #[error("Failed to build email: {message}")]
    Build { message: String },

    #[error("Email delivery failed: {message}")]
    Transport { message: String },
}
