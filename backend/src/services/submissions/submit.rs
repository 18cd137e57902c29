use crate::error::SubmitError;
use crate::storage::writer::RowWriter;
use actix_web::{web, HttpResponse, Responder};
use assessment_common::model::submission::Submission;
use assessment_common::responses::SubmitResponse;
use chrono::{Local, NaiveDate};
use log::{debug, error};

const SAVED: &str = "Response saved!";

/// HTTP handler wrapper that converts the submission outcome into a response.
///
/// - On success: `200 OK`.
/// - Without data: `400 Bad Request`.
/// - On any other failure: `500 Internal Server Error` carrying the fault text.
pub(crate) async fn process(body: web::Bytes, writer: web::Data<RowWriter>) -> impl Responder {
    match submit_form(&body, &writer, Local::now().date_naive()).await {
        Ok(()) => HttpResponse::Ok().json(SubmitResponse::ok(SAVED)),
        Err(SubmitError::NoData) => {
            debug!("Rejected submission without data ({} bytes)", body.len());
            HttpResponse::BadRequest().json(SubmitResponse::error(SubmitError::NoData.to_string()))
        }
        Err(e) => {
            error!("Error: {}", e);
            HttpResponse::InternalServerError().json(SubmitResponse::error(e.to_string()))
        }
    }
}

/// Normalizes one submission and appends it to the CSV log.
pub async fn submit_form(
    body: &[u8],
    writer: &RowWriter,
    today: NaiveDate,
) -> Result<(), SubmitError> {
    let mut submission = Submission::from_slice(body).ok_or(SubmitError::NoData)?;
    submission.normalize(today);

    let (questions, answers) = submission.into_row();
    writer.append(questions, answers).await?;
    Ok(())
}
