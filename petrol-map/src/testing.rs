//! Stub collaborators shared by orchestrator and web tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Coordinate, StationFeature};
use crate::geocoder::{GeocodeError, Geocoder, PostcodeQuery};
use crate::overpass::{FeatureSource, OverpassError, SearchQuery};

/// Canned geocoder reply.
#[derive(Debug, Clone, Copy)]
pub enum GeocodeReply {
    Found(Coordinate),
    NotFound,
    Timeout,
    ServerError,
}

/// Geocoder that answers from a fixed reply and records queries.
pub struct StubGeocoder {
    reply: GeocodeReply,
    pub calls: Mutex<Vec<PostcodeQuery>>,
}

impl StubGeocoder {
    pub fn new(reply: GeocodeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, query: &PostcodeQuery) -> Result<Option<Coordinate>, GeocodeError> {
        self.calls.lock().unwrap().push(query.clone());
        match self.reply {
            GeocodeReply::Found(c) => Ok(Some(c)),
            GeocodeReply::NotFound => Ok(None),
            GeocodeReply::Timeout => Err(GeocodeError::Timeout),
            GeocodeReply::ServerError => Err(GeocodeError::Service {
                status: 500,
                message: "Internal Server Error".into(),
            }),
        }
    }
}

/// Feature source returning a fixed list, or failing.
pub struct StubSource {
    features: Option<Vec<StationFeature>>,
    pub calls: Mutex<Vec<SearchQuery>>,
}

impl StubSource {
    pub fn returning(features: Vec<StationFeature>) -> Arc<Self> {
        Arc::new(Self {
            features: Some(features),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            features: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FeatureSource for StubSource {
    async fn features_near(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<StationFeature>, OverpassError> {
        self.calls.lock().unwrap().push(*query);
        self.features.clone().ok_or(OverpassError::Api {
            status: 504,
            message: "Gateway Timeout".into(),
        })
    }
}
