//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use sheet_match::error::SheetMatchError;
use sheet_match::matcher;
use sheet_match_common::TableSide;
use std::path::Path;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = matcher::read_upload_file(Path::new("/nonexistent/path/12345.xlsx"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, SheetMatchError::FileNotFound(_)));
    assert!(!err.is_client_error());
}

/// SheetMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SheetMatchError::Config("テスト設定エラー".to_string()),
        SheetMatchError::MissingUpload("Both files are required".to_string()),
        SheetMatchError::BadRequest("Invalid upload".to_string()),
        SheetMatchError::FileNotFound("test.xlsx".to_string()),
        SheetMatchError::TaskJoin("panicked".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// アップロード系のメッセージはそのまま返す
#[test]
fn test_missing_upload_message() {
    let err = SheetMatchError::MissingUpload("No selected file".to_string());
    assert_eq!(err.to_string(), "No selected file");
    assert!(err.is_client_error());
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SheetMatchError = io_err.into();

    assert!(matches!(err, SheetMatchError::Io(_)));
    assert!(!err.is_client_error());
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SheetMatchError = json_err.into();

    assert!(matches!(err, SheetMatchError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = sheet_match_common::Error::ColumnNotFound {
        side: TableSide::Reference,
        column: "zzz".to_string(),
    };
    let err: SheetMatchError = common_err.into();

    assert!(matches!(err, SheetMatchError::Common(_)));
    assert_eq!(err.to_string(), "Column 'zzz' not found in reference file");
    assert!(err.is_client_error());
}

/// Excel生成失敗はサーバエラー扱い
#[test]
fn test_excel_generation_is_server_error() {
    let err: SheetMatchError = sheet_match_common::Error::ExcelGeneration("保存失敗".to_string()).into();
    assert!(!err.is_client_error());
}
