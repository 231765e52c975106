use std::{convert::Infallible, sync::Arc};

use classifier::ClassifierConfig;
use thiserror::Error;
use warp::{http::StatusCode, Filter, Rejection, Reply};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no trained model for the configured class")]
    ModelNotFound,
    #[error("could not score the document")]
    ScoreFailed,
}

impl warp::reject::Reject for ApiError {}

pub fn with_classifier(
    classifier: Arc<ClassifierConfig>,
) -> impl Filter<Extract = (Arc<ClassifierConfig>,), Error = Rejection> + Clone {
    warp::any().map(move || classifier.clone()).boxed()
}

/// Maps rejections to JSON error bodies. A missing model and a failed
/// score stay distinguishable from the client side; neither is ever
/// reported as a zero score.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::ModelNotFound => (StatusCode::NOT_FOUND, api_error.to_string()),
            ApiError::ScoreFailed => (StatusCode::INTERNAL_SERVER_ERROR, api_error.to_string()),
        }
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, String::from("route not found"))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("unhandled error"),
        )
    };
    let body = warp::reply::json(&serde_json::json!({ "error": message }));
    Ok(warp::reply::with_status(body, status))
}
