// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use notification_cell::{LocalSchedule, MeetingNotice, NotificationError};
use shared_models::error::AppError;
use video_conferencing_cell::{extract_meeting_id, VideoConferencingError};

use crate::models::*;
use crate::state::AppointmentState;

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

/// Create a Zoom meeting for the requested start time and email the join link
#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppointmentState>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected create-appointment body: {}", rejection);
            return Err(AppError::from_json_rejection(rejection, CREATE_VALIDATION_MESSAGE));
        }
    };

    let appointment = request.validate(state.default_time_zone)?;
    let token = acquire_token(&state).await?;

    let meeting = state
        .zoom
        .create_meeting(&token, appointment.start_time)
        .await
        .map_err(|e| match e {
            VideoConferencingError::MissingJoinUrl => AppError::UpstreamApi {
                message: MISSING_LINK_MESSAGE.to_string(),
                detail: None,
            },
            _ => {
                error!("Error creating Zoom meeting: {}", e);
                AppError::UpstreamApi {
                    message: CREATE_ERROR_MESSAGE.to_string(),
                    detail: None,
                }
            }
        })?;

    let notice = MeetingNotice {
        to: appointment.user_email,
        join_url: meeting.join_url.clone(),
        schedule: LocalSchedule::new(appointment.start_time, appointment.time_zone),
    };

    let mail_sent = state
        .notifier
        .send_appointment_email(&notice, state.mail_policy)
        .await
        .map_err(notification_error)?;

    info!("Appointment meeting created for {}", notice.to);

    Ok(Json(json!({
        "message": if mail_sent { CREATED_AND_SENT } else { CREATED_NOT_SENT },
        "zoomLink": meeting.join_url,
        "correoEnviado": mail_sent
    })))
}

/// Move an existing Zoom meeting to a new start time and email the update
#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<Arc<AppointmentState>>,
    payload: Result<Json<RescheduleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected reschedule body: {}", rejection);
            return Err(AppError::from_json_rejection(rejection, RESCHEDULE_VALIDATION_MESSAGE));
        }
    };

    let reschedule = request.validate(state.default_time_zone)?;

    let meeting_id = extract_meeting_id(&reschedule.original_zoom_link)
        .ok_or_else(|| AppError::ValidationError(INVALID_LINK_MESSAGE.to_string()))?;

    let token = acquire_token(&state).await?;

    let updated = state
        .zoom
        .update_meeting(&meeting_id, reschedule.new_start_time, &token)
        .await
        .map_err(|e| {
            error!("Error rescheduling appointment {:?}: {}", reschedule.appointment_id, e);
            AppError::UpstreamApi {
                message: RESCHEDULE_ERROR_MESSAGE.to_string(),
                detail: Some(e.to_string()),
            }
        })?;

    let zoom_link = updated
        .join_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(reschedule.original_zoom_link);

    let notice = MeetingNotice {
        to: reschedule.user_email,
        join_url: zoom_link.clone(),
        schedule: LocalSchedule::new(reschedule.new_start_time, reschedule.time_zone),
    };

    let mail_sent = state
        .notifier
        .send_reschedule_email(&notice, state.mail_policy)
        .await
        .map_err(notification_error)?;

    info!("Meeting {} rescheduled for {}", meeting_id, notice.to);

    Ok(Json(json!({
        "message": if mail_sent { RESCHEDULED_AND_SENT } else { RESCHEDULED_NOT_SENT },
        "zoomLink": zoom_link,
        "correoEnviado": mail_sent
    })))
}

// ==============================================================================
// HELPERS
// ==============================================================================

async fn acquire_token(state: &AppointmentState) -> Result<String, AppError> {
    state.zoom.tokens().get_valid_token().await.map_err(|e| {
        error!("Error obtaining Zoom token: {}", e);
        AppError::UpstreamAuth(TOKEN_ERROR_MESSAGE.to_string())
    })
}

fn notification_error(e: NotificationError) -> AppError {
    AppError::Notification {
        message: NOTIFICATION_ERROR_MESSAGE.to_string(),
        detail: Some(e.to_string()),
    }
}
