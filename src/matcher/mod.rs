//! ファイル単位の照合処理
//!
//! Webハンドラと CLI の両方から使う。バイト列 → 表 → 照合 → xlsx の流れをまとめる。

mod types;

pub use types::{ColumnListing, MatchJob, MatchOutput};

use crate::error::{Result, SheetMatchError};
use sheet_match_common::{match_tables, read_table, write_table, DuplicateColumnPolicy, MatchRequest};
use std::path::Path;

/// 結果ファイル名
pub const RESULT_FILE_NAME: &str = "matched_results.xlsx";
/// 結果ファイルのMIMEタイプ
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 2ファイルの列名（正規化済み）を取得
pub fn inspect_columns(
    reference: &[u8],
    input: &[u8],
    policy: DuplicateColumnPolicy,
) -> Result<ColumnListing> {
    let reference = read_table(reference, policy)?;
    let input = read_table(input, policy)?;
    log::info!("列名取得: 参照 {}行 / 入力 {}行", reference.row_count(), input.row_count());

    Ok(ColumnListing {
        user_columns: input.columns().names().to_vec(),
        sfdc_columns: reference.columns().names().to_vec(),
    })
}

/// 2ファイルを照合して結果xlsxを作成
pub fn run_match(job: &MatchJob, policy: DuplicateColumnPolicy) -> Result<MatchOutput> {
    let reference = read_table(&job.reference, policy)?;
    let input = read_table(&job.input, policy)?;

    log::info!(
        "照合開始: 参照 {}行 / 入力 {}行 (列: {} ⇔ {})",
        reference.row_count(),
        input.row_count(),
        job.reference_column,
        job.input_column,
    );

    let request = MatchRequest::new(
        &reference,
        &input,
        &job.reference_column,
        &job.input_column,
        job.return_columns.as_slice(),
    );
    let result = match_tables(&request)?;
    let workbook = write_table(&result.table)?;

    Ok(MatchOutput {
        workbook,
        stats: result.stats,
    })
}

/// CLI用: ファイルを読み込む
pub fn read_upload_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(SheetMatchError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}
