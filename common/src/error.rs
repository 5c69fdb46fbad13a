//! エラー型定義

use crate::types::TableSide;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// スプレッドシートとして解釈できない
    #[error("Error reading Excel files: {0}")]
    Parse(String),

    /// 正規化後に列名が重複した
    #[error("Duplicate column '{0}' after normalizing column names")]
    DuplicateColumn(String),

    /// 照合列が見つからない
    #[error("Column '{column}' not found in {side} file")]
    ColumnNotFound { side: TableSide, column: String },

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),
}

impl Error {
    /// 利用者の入力に起因するエラーか（HTTPでは400扱い）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::DuplicateColumn(_) | Error::ColumnNotFound { .. }
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_column_not_found() {
        let error = Error::ColumnNotFound {
            side: TableSide::Reference,
            column: "zzz".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Column 'zzz' not found in reference file"
        );

        let error = Error::ColumnNotFound {
            side: TableSide::Input,
            column: "id".to_string(),
        };
        assert_eq!(error.to_string(), "Column 'id' not found in input file");
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("empty file".to_string());
        assert_eq!(error.to_string(), "Error reading Excel files: empty file");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::Parse("x".into()).is_client_error());
        assert!(Error::DuplicateColumn("id".into()).is_client_error());
        assert!(Error::ColumnNotFound {
            side: TableSide::Input,
            column: "id".into(),
        }
        .is_client_error());
        assert!(!Error::ExcelGeneration("x".into()).is_client_error());
    }

    #[test]
    fn test_error_display_excel_generation() {
        let error = Error::ExcelGeneration("Excel保存エラー".to_string());
        assert_eq!(error.to_string(), "Excel generation error: Excel保存エラー");
    }
}
