use std::sync::Arc;

use chrono_tz::Tz;

use notification_cell::{DeliveryPolicy, NotificationService};
use video_conferencing_cell::ZoomClient;

/// Process-wide dependencies shared by the appointment handlers.
pub struct AppointmentState {
    pub zoom: Arc<ZoomClient>,
    pub notifier: Arc<NotificationService>,
    pub default_time_zone: Tz,
    /// Meeting emails are best-effort unless overridden: the meeting is the
    /// primary outcome.
    pub mail_policy: DeliveryPolicy,
}

impl AppointmentState {
    pub fn new(
        zoom: Arc<ZoomClient>,
        notifier: Arc<NotificationService>,
        default_time_zone: Tz,
    ) -> Self {
        Self {
            zoom,
            notifier,
            default_time_zone,
            mail_policy: DeliveryPolicy::BestEffort,
        }
    }

    /// Under `Required`, a failed email fails the request with a 500.
    pub fn with_mail_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.mail_policy = policy;
        self
    }
}
