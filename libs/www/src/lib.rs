use std::sync::Arc;

use classifier::ClassifierConfig;
use log::info;
use serde::{Deserialize, Serialize};
use warp::Filter;

mod controllers;
mod handlers;

use handlers::{handle_rejection, APIRouter};

/// The body accepted on /send. `rate` rides along in the payload but
/// never reaches the scoring pipeline.
#[derive(Deserialize, Debug)]
pub struct ScoreRequest {
    pub description: String,
    pub headline: String,
    #[serde(default)]
    pub rate: f64,
}

#[derive(Serialize, Debug)]
pub struct ScoreResponse {
    pub class: String,
    pub probability: f64,
}

pub async fn server(port: u16, classifier: Arc<ClassifierConfig>) {
    let router = APIRouter { classifier };
    let routes = router.routes().recover(handle_rejection);
    info!("Starting Server at: http://0.0.0.0:{}", port);
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;
}
