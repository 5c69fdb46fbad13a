//! 完全一致照合モジュール
//!
//! 入力表の各行について、照合列の値が参照表の照合列に存在するかを判定し、
//! 結果表（Input Value / Matched / 指定列）を作る。
//!
//! ## 処理フロー
//! 1. 照合列の存在確認（参照表 → 入力表の順）
//! 2. 参照表のキー → 最初の行番号のインデックスを構築
//! 3. 入力表を行順に走査して結果行を作成

use crate::error::{Error, Result};
use crate::normalize::{match_key, normalize_column_name};
use crate::types::{Cell, Columns, Table, TableSide};
use serde::Serialize;
use std::collections::HashMap;

/// 結果表の入力値列
pub const INPUT_VALUE_COLUMN: &str = "Input Value";
/// 結果表の一致フラグ列
pub const MATCHED_COLUMN: &str = "Matched";

const MATCHED_YES: &str = "Yes";
const MATCHED_NO: &str = "No";

/// 照合リクエスト
#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    /// 参照表（正規化済み列名）
    pub reference: &'a Table,
    /// 入力表（正規化済み列名）
    pub input: &'a Table,
    /// 参照表の照合列
    pub reference_column: String,
    /// 入力表の照合列
    pub input_column: String,
    /// 結果に含める参照表の列（指定順）
    pub return_columns: Vec<String>,
}

impl<'a> MatchRequest<'a> {
    /// 照合列・返却列の名前を列名と同じ規則で正規化して作成
    pub fn new<S: AsRef<str>>(
        reference: &'a Table,
        input: &'a Table,
        reference_column: &str,
        input_column: &str,
        return_columns: &[S],
    ) -> Self {
        Self {
            reference,
            input,
            reference_column: normalize_column_name(reference_column),
            input_column: normalize_column_name(input_column),
            return_columns: return_columns
                .iter()
                .map(|c| normalize_column_name(c.as_ref()))
                .collect(),
        }
    }
}

/// 照合の統計情報
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    /// 入力行数
    pub total: usize,
    /// 一致した行数
    pub matched: usize,
    /// 一致しなかった行数
    pub unmatched: usize,
}

/// 照合結果
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub table: Table,
    pub stats: MatchStats,
}

/// 参照表と入力表を照合する
///
/// # Returns
/// * `Ok(MatchResult)` - 入力行と同数・同順の結果表
/// * `Err(Error::ColumnNotFound)` - 照合列がどちらかの表に無い
pub fn match_tables(request: &MatchRequest<'_>) -> Result<MatchResult> {
    let reference_key = request
        .reference
        .columns()
        .position(&request.reference_column)
        .ok_or_else(|| Error::ColumnNotFound {
            side: TableSide::Reference,
            column: request.reference_column.clone(),
        })?;
    let input_key = request
        .input
        .columns()
        .position(&request.input_column)
        .ok_or_else(|| Error::ColumnNotFound {
            side: TableSide::Input,
            column: request.input_column.clone(),
        })?;

    // 返却列: 参照表に存在するものだけ、重複は最初の指定を採用
    let mut output_columns = Columns::from_names([INPUT_VALUE_COLUMN, MATCHED_COLUMN])?;
    let mut copied: Vec<usize> = Vec::new();
    for column in &request.return_columns {
        let Some(position) = request.reference.columns().position(column) else {
            continue;
        };
        if output_columns.push(column.clone()).is_ok() {
            copied.push(position);
        }
    }

    // キー → 最初に出現した参照行
    let mut index: HashMap<String, usize> = HashMap::with_capacity(request.reference.row_count());
    for (row_idx, row) in request.reference.rows().iter().enumerate() {
        index.entry(match_key(&row[reference_key])).or_insert(row_idx);
    }

    let mut stats = MatchStats {
        total: request.input.row_count(),
        ..Default::default()
    };
    let mut table = Table::new(output_columns);

    for input_row in request.input.rows() {
        let key = match_key(&input_row[input_key]);
        let mut out = Vec::with_capacity(2 + copied.len());

        match index.get(&key) {
            Some(&reference_idx) => {
                let reference_row = &request.reference.rows()[reference_idx];
                out.push(Cell::Text(key));
                out.push(Cell::Text(MATCHED_YES.to_string()));
                out.extend(copied.iter().map(|&p| reference_row[p].clone()));
                stats.matched += 1;
            }
            None => {
                out.push(Cell::Text(key));
                out.push(Cell::Text(MATCHED_NO.to_string()));
                out.extend(copied.iter().map(|_| Cell::Text(String::new())));
                stats.unmatched += 1;
            }
        }

        table.push_row(out);
    }

    Ok(MatchResult { table, stats })
}
