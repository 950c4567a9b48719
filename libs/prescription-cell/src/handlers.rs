// libs/prescription-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use notification_cell::{DeliveryPolicy, PrescriptionNotice};
use shared_models::error::AppError;

use crate::models::*;
use crate::state::PrescriptionState;

/// The email is the whole point of the request, so a failed send fails it.
const MAIL_POLICY: DeliveryPolicy = DeliveryPolicy::Required;

/// Email a PDF prescription to the patient as an attachment
#[axum::debug_handler]
pub async fn send_prescription(
    State(state): State<Arc<PrescriptionState>>,
    payload: Result<Json<PrescriptionRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected prescription body: {}", rejection);
            return Err(AppError::from_json_rejection(rejection, VALIDATION_MESSAGE));
        }
    };

    let prescription = request.validate()?;
    let notice = PrescriptionNotice {
        to: prescription.email,
        patient_name: prescription.patient_name,
        pdf: prescription.pdf,
    };
    let recipient = notice.to.clone();

    state
        .notifier
        .send_prescription_email(notice, MAIL_POLICY)
        .await
        .map_err(|e| AppError::Notification {
            message: SEND_ERROR_MESSAGE.to_string(),
            detail: Some(e.to_string()),
        })?;

    info!("Prescription sent to {}", recipient);

    Ok(Json(json!({ "message": SENT_MESSAGE })))
}
