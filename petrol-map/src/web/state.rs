//! Application state for the web layer.

use std::sync::Arc;

use crate::search::StationSearch;

use super::csrf::CsrfSigner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Postcode-to-map pipeline
    pub search: Arc<StationSearch>,

    /// Form token signer, keyed with the application secret
    pub csrf: Arc<CsrfSigner>,
}

impl AppState {
    pub fn new(search: StationSearch, csrf: CsrfSigner) -> Self {
        Self {
            search: Arc::new(search),
            csrf: Arc::new(csrf),
        }
    }
}
