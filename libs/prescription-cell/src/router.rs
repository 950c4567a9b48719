// libs/prescription-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::state::PrescriptionState;

pub fn prescription_routes(state: Arc<PrescriptionState>) -> Router {
    Router::new()
        .route("/enviar-receta", post(handlers::send_prescription))
        .route("/send-prescription", post(handlers::send_prescription))
        .with_state(state)
}
