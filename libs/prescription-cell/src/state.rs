use std::sync::Arc;

use notification_cell::NotificationService;

pub struct PrescriptionState {
    pub notifier: Arc<NotificationService>,
}

impl PrescriptionState {
    pub fn new(notifier: Arc<NotificationService>) -> Self {
        Self { notifier }
    }
}
