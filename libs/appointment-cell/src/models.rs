// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::error::AppError;
use shared_utils::{parse_instant, resolve_time_zone};

// ==============================================================================
// USER-FACING MESSAGES
// ==============================================================================

pub const CREATE_VALIDATION_MESSAGE: &str = "Faltan campos obligatorios o el campo startTime tiene un formato no válido. Verifica userEmail y startTime (debe ser formato ISO 8601, ej: \"2024-10-30T10:00:00Z\").";
pub const RESCHEDULE_VALIDATION_MESSAGE: &str = "Faltan campos obligatorios o el formato de fecha es incorrecto. Se requieren: appointmentId, originalZoomLink, newStartTime (ISO 8601), userEmail";
pub const INVALID_LINK_MESSAGE: &str =
    "El enlace de Zoom proporcionado no es válido o no contiene un ID de reunión.";
pub const TOKEN_ERROR_MESSAGE: &str = "Error al obtener el token de Zoom.";
pub const CREATE_ERROR_MESSAGE: &str = "Error al crear la reunión de Zoom.";
pub const MISSING_LINK_MESSAGE: &str = "Error al crear la reunión de Zoom. No se recibió el enlace";
pub const RESCHEDULE_ERROR_MESSAGE: &str = "Error al reagendar la cita.";
pub const NOTIFICATION_ERROR_MESSAGE: &str = "No se pudo enviar el correo de la cita.";

pub const CREATED_AND_SENT: &str = "Reunión creada exitosamente y correo enviado.";
pub const CREATED_NOT_SENT: &str =
    "Reunión creada exitosamente, pero el correo no pudo ser enviado.";
pub const RESCHEDULED_AND_SENT: &str = "Reunión re-agendada exitosamente y correo enviado.";
pub const RESCHEDULED_NOT_SENT: &str =
    "Reunión re-agendada exitosamente, pero el correo no pudo ser enviado.";

pub fn invalid_time_zone_message(zone: &str) -> String {
    format!("La zona horaria proporcionada no es válida: {}", zone)
}

// ==============================================================================
// REQUEST DTOS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_email: Option<String>,
    pub start_time: Option<String>,
    pub user_time_zone: Option<String>,
}

/// Caller-side appointment identifier, any JSON value. Only its presence is
/// checked: `false`, `0`, blank strings and `null` count as missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AppointmentId(pub Value);

impl AppointmentId {
    fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(id) => !id.trim().is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub appointment_id: Option<AppointmentId>,
    pub original_zoom_link: Option<String>,
    pub new_start_time: Option<String>,
    pub user_email: Option<String>,
    pub user_time_zone: Option<String>,
}

// ==============================================================================
// VALIDATED COMMANDS
// ==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub user_email: String,
    pub start_time: DateTime<Utc>,
    pub time_zone: Tz,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reschedule {
    pub appointment_id: AppointmentId,
    pub original_zoom_link: String,
    pub new_start_time: DateTime<Utc>,
    pub user_email: String,
    pub time_zone: Tz,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl CreateAppointmentRequest {
    pub fn validate(self, default_time_zone: Tz) -> Result<NewAppointment, AppError> {
        let invalid = || AppError::ValidationError(CREATE_VALIDATION_MESSAGE.to_string());

        let user_email = present(self.user_email).ok_or_else(invalid)?;
        let start_time = present(self.start_time)
            .and_then(|raw| parse_instant(&raw))
            .ok_or_else(invalid)?;
        let time_zone = resolve_time_zone(self.user_time_zone.as_deref(), default_time_zone)
            .map_err(|zone| AppError::ValidationError(invalid_time_zone_message(&zone)))?;

        Ok(NewAppointment {
            user_email,
            start_time,
            time_zone,
        })
    }
}

impl RescheduleRequest {
    pub fn validate(self, default_time_zone: Tz) -> Result<Reschedule, AppError> {
        let invalid = || AppError::ValidationError(RESCHEDULE_VALIDATION_MESSAGE.to_string());

        let appointment_id = self
            .appointment_id
            .filter(AppointmentId::is_present)
            .ok_or_else(invalid)?;
        let original_zoom_link = present(self.original_zoom_link).ok_or_else(invalid)?;
        let user_email = present(self.user_email).ok_or_else(invalid)?;
        let new_start_time = present(self.new_start_time)
            .and_then(|raw| parse_instant(&raw))
            .ok_or_else(invalid)?;
        let time_zone = resolve_time_zone(self.user_time_zone.as_deref(), default_time_zone)
            .map_err(|zone| AppError::ValidationError(invalid_time_zone_message(&zone)))?;

        Ok(Reschedule {
            appointment_id,
            original_zoom_link,
            new_start_time,
            user_email,
            time_zone,
        })
    }
}
