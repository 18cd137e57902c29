//! Receives self-assessment form submissions.
//!
//! The provided route is:
//! - `POST /submit`: decodes the body as a JSON object whatever its content
//!   type, stamps `completion_date`, defaults `time_taken`, maps the four
//!   self-ratings to level labels and appends the result to the CSV log through
//!   the shared `RowWriter`. Answers `{"status":"ok","message":"Response saved!"}`,
//!   400 when the body carries no data, or 500 with the fault text when the
//!   append fails.

use actix_web::web::{post, resource};
use actix_web::Resource;

mod submit;

const SUBMIT_PATH: &str = "/submit";

/// Configures and returns the Actix resource for form submissions.
pub fn configure_routes() -> Resource {
    resource(SUBMIT_PATH).route(post().to(submit::process))
}
