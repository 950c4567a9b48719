//! # Appointment Cell
//!
//! HTTP endpoints that schedule and reschedule video consultations.
//!
//! - `POST /create-appointment` - create a Zoom meeting and email the link
//! - `POST /reschedule` - move an existing meeting and email the new time
//!
//! Both endpoints validate the body before touching the network and treat
//! the confirmation email as best-effort: once the meeting exists the
//! request succeeds and `correoEnviado` reports whether the email went out.

pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use router::appointment_routes;
pub use state::AppointmentState;
