// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The HTTP query surface.
//!
//! One tokio task per connection, all sharing one read-only `Corpus` through
//! an `Arc`. Routes:
//!
//! | Path          | Response                                   |
//! |---------------|--------------------------------------------|
//! | `/search`     | HTML results page for `?q=`                |
//! | `/api/search` | JSON results for `?q=`                     |
//! | anything else | static file below the home directory       |
//!
//! Only `GET` and `HEAD` are accepted. HTTP/1.1 framing is hyper's; each
//! accepted socket gets its own hyper connection task. Query evaluation runs
//! on the blocking pool so a large corpus scan never stalls the accept loop.

pub mod http;
pub mod render;

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::ServerError;
use crate::search::{search_or_failed, SearchOptions};
use crate::types::SearchResponse;

use self::http::{reason_phrase, Body, Request, Response};
use self::render::{content_type_for, error_page, results_json, results_page};

/// Everything a request handler needs, shared by all connections.
#[derive(Debug)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub home: PathBuf,
    pub options: SearchOptions,
}

impl AppState {
    pub fn new(corpus: Arc<Corpus>, config: &Config) -> Self {
        Self {
            corpus,
            home: config.home.clone(),
            options: config.search_options(),
        }
    }
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config, corpus: Arc<Corpus>) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind { addr, source: e })?;
    tracing::info!(
        documents = corpus.len(),
        "Listening on http://{}",
        listener.local_addr()?
    );

    let state = Arc::new(AppState::new(corpus, config));
    serve_listener(listener, state, shutdown_signal()).await
}

/// Serve connections from `listener` until `shutdown` completes.
pub async fn serve_listener<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => {
                tracing::info!("Shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        // Per-connection failures (e.g. EMFILE) must not end the loop
                        tracing::warn!("Accept failed: {}", e);
                        continue;
                    }
                };
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, state).await {
                        tracing::debug!(%peer, "Connection error: {}", e);
                    }
                });
            }
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn handle_connection(stream: TcpStream, state: Arc<AppState>) -> hyper::Result<()> {
    let service = service_fn(move |request: hyper::Request<Incoming>| {
        let state = Arc::clone(&state);
        let request = Request::from_hyper(&request);
        async move { Ok::<_, Infallible>(handle(&state, request).await) }
    });
    http1::Builder::new()
        .serve_connection(TokioIo::new(stream), service)
        .await
}

async fn handle(state: &Arc<AppState>, request: Request) -> hyper::Response<Body> {
    let head_only = request.method == Method::HEAD;
    let response = route(state, &request).await;
    tracing::debug!(
        method = %request.method,
        target = %request.target,
        status = response.status.as_u16(),
        "Handled request"
    );
    response.into_hyper(head_only)
}

/// Dispatch one request.
pub async fn route(state: &Arc<AppState>, request: &Request) -> Response {
    if request.method != Method::GET && request.method != Method::HEAD {
        return status_response(StatusCode::METHOD_NOT_ALLOWED).with_allow("GET, HEAD");
    }

    match request.path() {
        "/search" => {
            let response = run_search(state, request).await;
            Response::html(results_page(&response))
        }
        "/api/search" => {
            let response = run_search(state, request).await;
            match results_json(&response) {
                Ok(json) => Response::json(json),
                Err(e) => {
                    tracing::error!("Failed to serialize search response: {}", e);
                    status_response(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }
        path => serve_static(&state.home, path).await,
    }
}

async fn run_search(state: &Arc<AppState>, request: &Request) -> SearchResponse {
    let query = request.query_param("q").unwrap_or_default();
    let state = Arc::clone(state);
    let query_for_task = query.clone();
    let evaluated = tokio::task::spawn_blocking(move || {
        search_or_failed(&state.corpus, &query_for_task, &state.options)
    })
    .await;

    evaluated.unwrap_or_else(|e| {
        tracing::error!("Query evaluation task failed: {}", e);
        SearchResponse::failed(&query, "Query evaluation failed".to_string())
    })
}

/// Serve a file below `home`. `/` and directory paths map to `index.html`.
async fn serve_static(home: &Path, url_path: &str) -> Response {
    let Some(relative) = resolve_static_path(url_path) else {
        return status_response(StatusCode::FORBIDDEN);
    };

    let mut path = home.join(relative);
    if tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        path.push("index.html");
    }

    match tokio::fs::read(&path).await {
        Ok(body) => Response::new(StatusCode::OK, content_type_for(&path), body),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::IsADirectory) => {
            status_response(StatusCode::NOT_FOUND)
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            status_response(StatusCode::FORBIDDEN)
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            status_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Percent-decode a URL path and turn it into a relative filesystem path.
///
/// `None` when the path tries to climb out of the home directory.
pub fn resolve_static_path(url_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(url_path).ok()?;
    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains('\\') || segment.contains('\0') {
            return None;
        }
        // Anything that is not a plain name (e.g. a drive prefix) is refused
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => relative.push(segment),
            _ => return None,
        }
    }
    if relative.as_os_str().is_empty() {
        relative.push("index.html");
    }
    Some(relative)
}

fn status_response(status: StatusCode) -> Response {
    Response::new(
        status,
        "text/html; charset=utf-8",
        error_page(status.as_u16(), reason_phrase(status)),
    )
}
