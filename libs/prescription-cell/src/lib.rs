//! # Prescription Cell
//!
//! `POST /enviar-receta` (alias `POST /send-prescription`) emails a
//! base64-encoded PDF prescription to the patient. Unlike the meeting
//! endpoints, a failed send fails the request.

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use router::prescription_routes;
pub use state::PrescriptionState;
