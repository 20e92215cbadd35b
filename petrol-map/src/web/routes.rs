//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::map::MapError;

use super::form::PetrolForm;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page).post(search))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "The requested page does not exist.".into(),
    }
}

/// Empty form over the default map.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let map_html = state.search.base_map().serialize()?;
    render(IndexTemplate::blank(state.csrf.issue(), map_html))
}

/// Handle a form submission.
///
/// A rejected form re-renders the default map with the field errors. An
/// accepted one runs the search; its notice (if any) is shown above the map.
async fn search(
    State(state): State<AppState>,
    Form(form): Form<PetrolForm>,
) -> Result<Html<String>, AppError> {
    let csrf_token = state.csrf.issue();

    let request = match (state.csrf.verify(&form.csrf_token), form.validate()) {
        (Ok(()), Ok(request)) => request,
        (checked, validated) => {
            let mut errors = validated.err().unwrap_or_default();
            if let Err(e) = checked {
                errors.form.push(e.to_string());
            }
            info!(?errors, "search form rejected");

            let map_html = state.search.base_map().serialize()?;
            return render(IndexTemplate {
                errors,
                ..IndexTemplate::submitted(&form, csrf_token, map_html)
            });
        }
    };

    let outcome = state.search.run(&request).await;
    let map_html = outcome.map.serialize()?;

    render(IndexTemplate {
        notice: outcome.notice.map(|n| n.message().to_string()),
        stations: outcome.stations.iter().map(StationView::from).collect(),
        ..IndexTemplate::submitted(&form, csrf_token, map_html)
    })
}

fn render(page: impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<MapError> for AppError {
    fn from(e: MapError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, "Not found", message),
            AppError::Internal { message } => {
                error!(%message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "The map could not be drawn. Please try again.".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            title: title.to_string(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, title).into_response(),
        }
    }
}
