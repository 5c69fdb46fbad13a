use super::upload::UploadForm;
use super::AppState;
use crate::error::{Result, SheetMatchError};
use crate::matcher::{self, ColumnListing, RESULT_FILE_NAME, XLSX_MIME};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/js/script.js");

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

/// 2ファイルの列名一覧を返す
pub async fn get_columns(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ColumnListing>> {
    let (reference, input) = UploadForm::read(multipart).await?.into_files()?;
    log::info!("列名取得: 参照={} 入力={}", reference.file_name, input.file_name);

    let policy = state.config.duplicate_columns;
    let listing = tokio::task::spawn_blocking(move || {
        matcher::inspect_columns(&reference.bytes, &input.bytes, policy)
    })
    .await
    .map_err(|e| SheetMatchError::TaskJoin(e.to_string()))??;

    Ok(Json(listing))
}

/// 照合してxlsxを返す
pub async fn match_files(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Response> {
    let (job, reference_name, input_name) = UploadForm::read(multipart).await?.into_job()?;
    log::info!(
        "照合: 参照={} [{}] 入力={} [{}] 返却列={:?}",
        reference_name,
        job.reference_column,
        input_name,
        job.input_column,
        job.return_columns,
    );

    let policy = state.config.duplicate_columns;
    let output = tokio::task::spawn_blocking(move || matcher::run_match(&job, policy))
        .await
        .map_err(|e| SheetMatchError::TaskJoin(e.to_string()))??;

    log::info!(
        "照合完了: {}行中 一致{} / 不一致{}",
        output.stats.total,
        output.stats.matched,
        output.stats.unmatched,
    );

    let disposition = format!("attachment; filename=\"{}\"", RESULT_FILE_NAME);
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output.workbook,
    )
        .into_response())
}
