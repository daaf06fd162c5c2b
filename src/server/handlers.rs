use super::{types::BillAnalysisResponse, upload::read_image};
use crate::{Error, gemini::BillExtractor};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; every analysis then fails.
    pub extractor: Option<Arc<dyn BillExtractor>>,
}

type HandlerResult = Result<Json<BillAnalysisResponse>, (StatusCode, Json<BillAnalysisResponse>)>;

pub async fn root() -> &'static str {
    "Hello Fibre"
}

pub async fn analyze_bill(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> HandlerResult {
    let span = info_span!("analyze_bill", request_id = %Uuid::new_v4());
    analyze(state, multipart).instrument(span).await
}

async fn analyze(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> HandlerResult {
    let Some(extractor) = state.extractor else {
        return Err(reject(Error::MissingCredential));
    };

    let multipart = multipart.map_err(|e| {
        warn!("Rejected non-multipart request: {}", e);
        reject(Error::MissingFile)
    })?;

    let image = read_image(multipart).await.map_err(reject)?;
    info!(
        "Received bill image: {} bytes, {}",
        image.bytes.len(),
        image.mime_type
    );

    let data = extractor
        .extract(&image.bytes, &image.mime_type)
        .await
        .map_err(reject)?;

    info!("Successfully analyzed bill");
    Ok(Json(BillAnalysisResponse::success(data)))
}

fn reject(err: Error) -> (StatusCode, Json<BillAnalysisResponse>) {
    let status = err.status_code();
    if status.is_server_error() {
        error!("Failed to analyze bill: {}", err);
    } else {
        warn!("Rejected bill upload: {}", err);
    }
    (
        status,
        Json(BillAnalysisResponse::failure(err.response_message())),
    )
}
