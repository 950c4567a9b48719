use std::sync::Arc;

use tracing::{error, info};

use crate::models::{
    DeliveryPolicy, EmailAttachment, MeetingNotice, NotificationError, OutgoingEmail,
    PrescriptionNotice,
};
use crate::services::mailer::MailTransport;
use crate::services::templates;

/// Renders patient notifications and hands them to a [`MailTransport`].
///
/// Every send returns `Ok(true)` when delivered. A failure becomes `Ok(false)`
/// under [`DeliveryPolicy::BestEffort`] and an error under
/// [`DeliveryPolicy::Required`].
pub struct NotificationService {
    transport: Arc<dyn MailTransport>,
}

impl NotificationService {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    pub async fn send_appointment_email(
        &self,
        notice: &MeetingNotice,
        policy: DeliveryPolicy,
    ) -> Result<bool, NotificationError> {
        let email = OutgoingEmail {
            sender_name: templates::MEETING_SENDER_NAME.to_string(),
            to: notice.to.clone(),
            subject: templates::APPOINTMENT_SUBJECT.to_string(),
            html: templates::appointment_email(notice),
            attachments: Vec::new(),
        };

        self.dispatch(email, policy).await
    }

    pub async fn send_reschedule_email(
        &self,
        notice: &MeetingNotice,
        policy: DeliveryPolicy,
    ) -> Result<bool, NotificationError> {
        let email = OutgoingEmail {
            sender_name: templates::MEETING_SENDER_NAME.to_string(),
            to: notice.to.clone(),
            subject: templates::RESCHEDULE_SUBJECT.to_string(),
            html: templates::reschedule_email(notice),
            attachments: Vec::new(),
        };

        self.dispatch(email, policy).await
    }

    pub async fn send_prescription_email(
        &self,
        notice: PrescriptionNotice,
        policy: DeliveryPolicy,
    ) -> Result<bool, NotificationError> {
        let email = OutgoingEmail {
            sender_name: templates::PRESCRIPTION_SENDER_NAME.to_string(),
            to: notice.to,
            subject: templates::prescription_subject(&notice.patient_name),
            html: templates::prescription_email(&notice.patient_name),
            attachments: vec![EmailAttachment {
                filename: templates::prescription_filename(&notice.patient_name),
                content_type: templates::PDF_CONTENT_TYPE.to_string(),
                data: notice.pdf,
            }],
        };

        self.dispatch(email, policy).await
    }

    async fn dispatch(
        &self,
        email: OutgoingEmail,
        policy: DeliveryPolicy,
    ) -> Result<bool, NotificationError> {
        let recipient = email.to.clone();
        let subject = email.subject.clone();

        match self.transport.deliver(email).await {
            Ok(()) => {
                info!("Email \"{}\" sent to {}", subject, recipient);
                Ok(true)
            }
            Err(e) => {
                error!("Failed to send \"{}\" to {}: {}", subject, recipient, e);
                match policy {
                    DeliveryPolicy::BestEffort => Ok(false),
                    DeliveryPolicy::Required => Err(e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use crate::services::mailer::MockMailTransport;
    use crate::services::schedule::LocalSchedule;

    fn meeting_notice() -> MeetingNotice {
        MeetingNotice {
            to: "paciente@example.com".to_string(),
            join_url: "https://zoom.us/j/123456789".to_string(),
            schedule: LocalSchedule::new(
                Utc.with_ymd_and_hms(2024, 10, 30, 10, 0, 0).unwrap(),
                chrono_tz::America::Guayaquil,
            ),
        }
    }

    fn failing_transport() -> MockMailTransport {
        let mut transport = MockMailTransport::new();
        transport.expect_deliver().times(1).returning(|_| {
            Err(NotificationError::Transport {
                message: "535 Authentication failed".to_string(),
            })
        });
        transport
    }

    #[tokio::test]
    async fn test_appointment_email_is_rendered_and_delivered() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_deliver()
            .withf(|email| {
                email.to == "paciente@example.com"
                    && email.subject == "Detalles de tu cita médica"
                    && email.sender_name == "Cita Médica"
                    && email.html.contains("https://zoom.us/j/123456789")
                    && email.attachments.is_empty()
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = NotificationService::new(Arc::new(transport));
        let sent = service
            .send_appointment_email(&meeting_notice(), DeliveryPolicy::BestEffort)
            .await;

        assert_matches!(sent, Ok(true));
    }

    #[tokio::test]
    async fn test_best_effort_failure_reports_not_sent() {
        let service = NotificationService::new(Arc::new(failing_transport()));

        let sent = service
            .send_reschedule_email(&meeting_notice(), DeliveryPolicy::BestEffort)
            .await;

        assert_matches!(sent, Ok(false));
    }

    #[tokio::test]
    async fn test_required_failure_propagates() {
        let service = NotificationService::new(Arc::new(failing_transport()));

        let result = service
            .send_appointment_email(&meeting_notice(), DeliveryPolicy::Required)
            .await;

        assert_matches!(result, Err(NotificationError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_prescription_attaches_pdf() {
        let mut transport = MockMailTransport::new();
        transport
            .expect_deliver()
            .withf(|email| {
                email.subject == "Receta Medica de Ana Pérez"
                    && email.sender_name == "Receta Medica"
                    && email.attachments.len() == 1
                    && email.attachments[0].filename == "Receta-Ana Pérez.pdf"
                    && email.attachments[0].content_type == "application/pdf"
                    && email.attachments[0].data == b"%PDF-1.4 test".to_vec()
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = NotificationService::new(Arc::new(transport));
        let notice = PrescriptionNotice {
            to: "ana@example.com".to_string(),
            patient_name: "Ana Pérez".to_string(),
            pdf: b"%PDF-1.4 test".to_vec(),
        };

        assert_matches!(
            service
                .send_prescription_email(notice, DeliveryPolicy::Required)
                .await,
            Ok(true)
        );
    }
}
