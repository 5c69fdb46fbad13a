use serde::{Deserialize, Serialize};
use sheet_match_common::MatchStats;

/// 列名一覧（/get-columns のレスポンス）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnListing {
    /// 入力ファイル（file2）の列名
    pub user_columns: Vec<String>,
    /// 参照ファイル（file1）の列名
    pub sfdc_columns: Vec<String>,
}

/// 照合ジョブ（2ファイル + 列指定）
#[derive(Debug, Clone, Default)]
pub struct MatchJob {
    pub reference: Vec<u8>,
    pub input: Vec<u8>,
    pub reference_column: String,
    pub input_column: String,
    pub return_columns: Vec<String>,
}

/// 照合の出力
#[derive(Debug, Clone)]
pub struct MatchOutput {
    /// 結果xlsx
    pub workbook: Vec<u8>,
    pub stats: MatchStats,
}
