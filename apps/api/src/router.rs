use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use appointment_cell::{appointment_routes, AppointmentState};
use prescription_cell::{prescription_routes, PrescriptionState};

/// Assembles every endpoint behind one body limit. Prescription PDFs travel
/// inline as base64, so the limit must sit well above axum's 2 MB default.
pub fn create_router(
    appointments: Arc<AppointmentState>,
    prescriptions: Arc<PrescriptionState>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Telecita API is running!" }))
        .merge(appointment_routes(appointments))
        .merge(prescription_routes(prescriptions))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}
