//! Excel読み込み（共通ライブラリ）
//!
//! アップロードされたバイト列を calamine で解析し、最初のシートを `Table` にする。
//! 1行目（最初に値のある行）をヘッダとして扱う。
//! 列位置はシートのA列から数える（使用範囲がB列以降から始まる場合は空列で埋める）。

use crate::error::{Error, Result};
use crate::normalize::{build_table, DuplicateColumnPolicy};
use crate::types::{Cell, Table};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// 日時セルの文字列表現
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// バイト列から表を読み込む
///
/// xlsx / xlsm / xlsb / xls / ods を自動判別する。
///
/// # Arguments
/// * `bytes` - ファイルの中身
/// * `policy` - 列名が正規化で重複した場合の扱い
pub fn read_table(bytes: &[u8], policy: DuplicateColumnPolicy) -> Result<Table> {
    if bytes.is_empty() {
        return Err(Error::Parse("empty file".into()));
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::Parse(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Parse("workbook has no worksheets".into()))?
        .map_err(|e| Error::Parse(e.to_string()))?;

    // 使用範囲の開始列（A列 = 0）
    let leading = range.start().map_or(0, |(_, col)| col as usize);

    let mut rows = range.rows();
    let header: Vec<Cell> = match rows.next() {
        Some(row) => sheet_row(row, leading),
        None => Vec::new(),
    };
    let data: Vec<Vec<Cell>> = rows.map(|row| sheet_row(row, leading)).collect();

    build_table(&header, data, policy)
}

/// 使用範囲の1行をA列起点の行にする
fn sheet_row(row: &[Data], leading: usize) -> Vec<Cell> {
    let mut cells = vec![Cell::Empty; leading];
    cells.extend(row.iter().map(data_to_cell));
    cells
}

/// calamineのセル値を `Cell` に変換
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => Cell::Text(value.format(DATETIME_FORMAT).to_string()),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
    }
}
