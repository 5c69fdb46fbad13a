//! Webサーバ
//!
//! - `GET /` アップロード画面
//! - `POST /get-columns` 2ファイルの列名一覧
//! - `POST /match` 照合結果xlsxのダウンロード

mod handlers;
pub mod upload;

use crate::config::Config;
use crate::error::{Result, SheetMatchError};
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

/// リクエスト間で共有する状態（起動時に一度だけ作る）
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// ルーティングを構築
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/", get(handlers::home))
        .route("/static/js/script.js", get(handlers::script))
        .route("/get-columns", post(handlers::get_columns))
        .route("/match", post(handlers::match_files))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// 設定のホスト・ポートで待ち受けを開始
pub async fn serve(config: Config) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log::info!("待ち受け開始: http://{}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(config))).await?;
    Ok(())
}

impl IntoResponse for SheetMatchError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            log::warn!("リクエストエラー: {}", self);
            let body = Json(json!({ "error": self.to_string() }));
            (StatusCode::BAD_REQUEST, body).into_response()
        } else {
            log::error!("処理エラー: {}", self);
            let body = Json(json!({ "error": format!("Failed to process request: {}", self) }));
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}
