//! Sheet Match Common Library
//!
//! CLIとWebサーバで共有される表モデル・照合ロジック・スプレッドシート入出力

pub mod types;
pub mod error;
pub mod normalize;
pub mod matcher;
pub mod import;
pub mod export;

pub use types::{Cell, Columns, Table, TableSide};
pub use error::{Error, Result};
pub use normalize::{normalize_column_name, normalize_column_names, match_key, DuplicateColumnPolicy};
pub use matcher::{match_tables, MatchRequest, MatchResult, MatchStats, INPUT_VALUE_COLUMN, MATCHED_COLUMN};

#[cfg(feature = "excel")]
pub use import::excel_reader::read_table;
#[cfg(feature = "excel")]
pub use export::excel_core::write_table;
