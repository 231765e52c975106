use std::{sync::Arc, time::Instant};

use classifier::{score, ClassifierConfig, Document, ScoreError};
use log::{debug, error};
use warp::{Rejection, Reply};

use crate::{handlers::ApiError, ScoreRequest, ScoreResponse};

pub async fn classify(
    request: ScoreRequest,
    classifier: Arc<ClassifierConfig>,
) -> Result<impl Reply, Rejection> {
    let document = Document {
        headline: request.headline,
        description: request.description,
    };
    let now = Instant::now();
    match score(&classifier, &document).await {
        Ok(probability) => {
            debug!("[classify]: {:?}", now.elapsed());
            Ok(warp::reply::json(&ScoreResponse {
                class: classifier.class.clone(),
                probability,
            }))
        }
        Err(ScoreError::ModelNotFound(class)) => {
            error!("no trained model for {}", class);
            Err(warp::reject::custom(ApiError::ModelNotFound))
        }
        Err(err) => {
            error!("could not score document: {}", err);
            Err(warp::reject::custom(ApiError::ScoreFailed))
        }
    }
}

pub async fn heartbeat() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({ "message": "ok" })))
}
