//! multipartフォームの読み取り

use crate::error::{Result, SheetMatchError};
use crate::matcher::MatchJob;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::Multipart;

/// 参照ファイルのフィールド名
pub const REFERENCE_FIELD: &str = "file1";
/// 入力ファイルのフィールド名
pub const INPUT_FIELD: &str = "file2";

/// アップロードされたファイル
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// /get-columns と /match 共通のフォーム内容
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub reference: Option<UploadedFile>,
    pub input: Option<UploadedFile>,
    pub match_column_input: String,
    pub match_column_sfdc: String,
    pub return_columns: Vec<String>,
}

impl UploadForm {
    /// multipartを最後まで読み取る
    ///
    /// 未知のフィールドは読み飛ばす。`return_columns[]` は出現順に全て集める。
    /// multipart以外のリクエスト（本文なし・urlencoded等）はファイル未指定として扱う。
    pub async fn read(multipart: std::result::Result<Multipart, MultipartRejection>) -> Result<Self> {
        let mut multipart = multipart.map_err(not_multipart)?;
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                REFERENCE_FIELD | INPUT_FIELD => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(bad_request)?.to_vec();
                    let file = UploadedFile { file_name, bytes };
                    if name == REFERENCE_FIELD {
                        form.reference = Some(file);
                    } else {
                        form.input = Some(file);
                    }
                }
                "match_column_input" => {
                    form.match_column_input = field.text().await.map_err(bad_request)?;
                }
                "match_column_sfdc" => {
                    form.match_column_sfdc = field.text().await.map_err(bad_request)?;
                }
                "return_columns[]" | "return_columns" => {
                    form.return_columns.push(field.text().await.map_err(bad_request)?);
                }
                other => log::debug!("未知のフィールドを無視: {}", other),
            }
        }

        Ok(form)
    }

    /// 2ファイルを取り出す（解析前に存在チェック）
    pub fn into_files(self) -> Result<(UploadedFile, UploadedFile)> {
        require_files(self.reference, self.input)
    }

    /// 照合ジョブに変換（参照・入力のファイル名も返す）
    pub fn into_job(self) -> Result<(MatchJob, String, String)> {
        let (reference, input) = require_files(self.reference, self.input)?;

        let job = MatchJob {
            reference: reference.bytes,
            input: input.bytes,
            reference_column: self.match_column_sfdc,
            input_column: self.match_column_input,
            return_columns: self.return_columns,
        };
        Ok((job, reference.file_name, input.file_name))
    }
}

fn require_files(
    reference: Option<UploadedFile>,
    input: Option<UploadedFile>,
) -> Result<(UploadedFile, UploadedFile)> {
    let (Some(reference), Some(input)) = (reference, input) else {
        return Err(SheetMatchError::MissingUpload("Both files are required".into()));
    };
    if reference.file_name.is_empty() || input.file_name.is_empty() {
        return Err(SheetMatchError::MissingUpload("No selected file".into()));
    }
    Ok((reference, input))
}

fn not_multipart(rejection: MultipartRejection) -> SheetMatchError {
    log::debug!("multipartではないリクエスト: {}", rejection.body_text());
    SheetMatchError::MissingUpload("Both files are required".into())
}

fn bad_request(err: MultipartError) -> SheetMatchError {
    SheetMatchError::BadRequest(format!("Invalid upload: {}", err.body_text()))
}
