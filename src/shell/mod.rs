pub mod view;

use crate::config::ScraperConfig;
use crate::record::JobListing;
use crate::{JobSearch, export, utils};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Bounds on the number-of-jobs input
pub const MIN_JOBS: u32 = 5;
pub const MAX_JOBS: u32 = 50;

const DEFAULT_JOBS: u32 = 10;

/// State of one interactive session: the three inputs, the last search's
/// rows, and a status line. Lives only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub role: String,
    pub location: String,
    pub max_jobs: u32,
    pub rows: Vec<JobListing>,
    pub status: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            role: String::new(),
            location: String::new(),
            max_jobs: DEFAULT_JOBS,
            rows: Vec::new(),
            status: None,
        }
    }
}

impl ViewState {
    /// Return the view to its initial values
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Shared application state behind the shell's routes
pub struct AppState {
    pub view: Mutex<ViewState>,
    pub config: ScraperConfig,
}

impl AppState {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            view: Mutex::new(ViewState::default()),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    role: String,
    location: String,
    max_jobs: u32,
}

/// Builds the shell's router over shared state
pub fn router(app: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", post(search))
        .route("/clear", post(clear))
        .route("/export", get(export_csv))
        .with_state(app)
}

/// Binds the address and serves the shell until the process ends
pub async fn serve(addr: &str, config: ScraperConfig) -> Result<(), Box<dyn Error>> {
    let app = Arc::new(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ::log::info!("Shell listening on http://{}", addr);
    axum::serve(listener, router(app)).await?;
    Ok(())
}

async fn index(State(app): State<Arc<AppState>>) -> Html<String> {
    let view = app.view.lock().await;
    Html(view::render_page(&view))
}

/// Runs a scrape while holding the view lock, so the interface blocks for
/// the scrape's duration and concurrent searches queue instead of racing
async fn search(State(app): State<Arc<AppState>>, Form(form): Form<SearchForm>) -> Redirect {
    let mut view = app.view.lock().await;

    let cap = form.max_jobs.clamp(MIN_JOBS, MAX_JOBS);
    view.role = form.role.clone();
    view.location = form.location.clone();
    view.max_jobs = cap;

    ::log::info!(
        "Search requested: role={:?} location={:?} cap={}",
        form.role,
        form.location,
        cap
    );

    let result = JobSearch::new(&form.role, &form.location)
        .with_limit(cap)
        .with_config(app.config.clone())
        .run()
        .await;

    match result {
        Ok(rows) => {
            view.status = Some(format!("Found {} job(s)", rows.len()));
            view.rows = rows;
        }
        Err(e) => {
            ::log::error!("Scrape failed: {}", e);
            view.status = Some(format!("Search failed: {}", e));
            view.rows.clear();
        }
    }

    Redirect::to("/")
}

async fn clear(State(app): State<Arc<AppState>>) -> Redirect {
    app.view.lock().await.reset();
    Redirect::to("/")
}

async fn export_csv(State(app): State<Arc<AppState>>) -> Response {
    let view = app.view.lock().await;

    match export::csv_string(&view.rows) {
        Ok(body) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                utils::export_filename(&view.role)
            );
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            ::log::error!("CSV export failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "export failed").into_response()
        }
    }
}
