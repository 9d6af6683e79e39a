// bases/remote_server/src/server.rs
use crate::config::Config;
use crate::dispatch::{Action, Dispatcher};
use crate::error::DispatchError;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use player_control::PlayerControl;
use serde::Deserialize;
use std::sync::Arc;
use stream_catalog::{Station, StreamCatalog};
use tower_http::services::ServeDir;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    dispatcher: Arc<Dispatcher>,
    catalog: Arc<StreamCatalog>,
}

/// Main template for the control page
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    stations: Vec<Station>,
}

/// Form payload for action submissions; only play-stream carries a field.
#[derive(Debug, Deserialize)]
struct ActionForm {
    stream: Option<String>,
}

/// Run the remote control HTTP server
pub async fn run(
    player: Arc<dyn PlayerControl>,
    catalog: StreamCatalog,
    config: Config,
) -> color_eyre::Result<()> {
    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(player)),
        catalog: Arc::new(catalog),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/action/:name", post(action))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Remote control listening on http://{}", addr);
    info!("Point a phone on the same network at this machine's address");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Handler for the control page
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        stations: state.catalog.stations().to_vec(),
    };

    let html = template
        .render()
        .map_err(|e| AppError::Template(e.to_string()))?;

    Ok(Html(html))
}

/// Handler for action submissions: one route per action via the path segment.
async fn action(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<ActionForm>,
) -> Result<Redirect, AppError> {
    let action = Action::parse(&name, form.stream.as_deref())?;
    state.dispatcher.dispatch(action).await?;

    // Redirect-after-action keeps a page refresh from resubmitting the command
    Ok(Redirect::to("/"))
}

/// Application-level errors for HTTP handlers
#[derive(Debug)]
enum AppError {
    Rejected(String),
    Player(String),
    Template(String),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::InvalidAction(_)
            | DispatchError::MissingStream
            | DispatchError::InvalidStream { .. } => AppError::Rejected(err.to_string()),
            DispatchError::Player(_) => AppError::Player(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Rejected(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Player(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = format!(
            r#"<!DOCTYPE html>
            <html>
            <head><title>Error</title></head>
            <body>
                <h1>Error</h1>
                <p>{}</p>
                <a href="/">Back to the controller</a>
            </body>
            </html>"#,
            message
        );

        (status, Html(body)).into_response()
    }
}
