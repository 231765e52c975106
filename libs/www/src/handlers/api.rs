use std::sync::Arc;

use classifier::ClassifierConfig;
use warp::{Filter, Rejection, Reply};

use crate::controllers::{classify, heartbeat};

use super::{filters::with_classifier, MAX_BODY_SIZE};

pub struct APIRouter {
    pub classifier: Arc<ClassifierConfig>,
}

impl APIRouter {
    pub fn routes(&self) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
        self.send().or(self.heartbeat())
    }
    fn send(&self) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
        warp::post().and(
            warp::path("send").and(
                warp::body::content_length_limit(MAX_BODY_SIZE)
                    .and(warp::body::json())
                    .and(with_classifier(self.classifier.clone()))
                    .and_then(classify),
            ),
        )
    }
    fn heartbeat(&self) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
        warp::get()
            .and(warp::path("heartbeat"))
            .and_then(heartbeat)
    }
}
