use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// アップロードファイルが無い・ファイル名が空
    #[error("{0}")]
    MissingUpload(String),

    /// multipartの形式不正など
    #[error("{0}")]
    BadRequest(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Common(#[from] sheet_match_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("タスク実行エラー: {0}")]
    TaskJoin(String),
}

impl SheetMatchError {
    /// 利用者側の入力が原因のエラーか（HTTP 400）
    pub fn is_client_error(&self) -> bool {
        match self {
            SheetMatchError::MissingUpload(_) | SheetMatchError::BadRequest(_) => true,
            SheetMatchError::Common(e) => e.is_client_error(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetMatchError>;
