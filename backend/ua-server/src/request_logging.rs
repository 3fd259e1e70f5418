//! Access log middleware: one line per request.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::header::USER_AGENT,
    middleware::Next,
    response::Response,
};
use log::info;

pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();

    // ConnectInfo is only present when served with into_make_service_with_connect_info
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| String::from("-"));
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let version = request.version();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    info!(
        "{} \"{} {} {:?}\" {} {:?} \"{}\"",
        client,
        method,
        path,
        version,
        response.status().as_u16(),
        start.elapsed(),
        user_agent
    );

    response
}
