// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::state::AppointmentState;

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route("/create-appointment", post(handlers::create_appointment))
        .route("/reschedule", post(handlers::reschedule_appointment))
        .with_state(state)
}
