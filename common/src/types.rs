//! 表データの型定義
//!
//! CLIとWebサーバで共有される型:
//! - Cell: セル値（文字列 / 数値 / 空）
//! - Columns: 列名 → 位置の順序付きマッピング
//! - Table: 列ヘッダと行の集合

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// セル値
///
/// スプレッドシートの値はこの3種類に閉じる。
/// 真偽値・日時は取り込み時に文字列化する（`import` 参照）。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    #[default]
    Empty,
}

impl Cell {
    /// 文字列セルを作成（空文字列は `Empty`）
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }

    /// 空セル、または空文字列か
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Empty => Ok(()),
        }
    }
}

/// どちらの表か（エラー表示用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSide {
    /// 照合先（file1 / SFDC側）
    Reference,
    /// 照合元（file2 / ユーザー側）
    Input,
}

impl std::fmt::Display for TableSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSide::Reference => write!(f, "reference"),
            TableSide::Input => write!(f, "input"),
        }
    }
}

/// 列名 → 位置の順序付きマッピング
///
/// 列名は一意。重複の扱いは取り込み側（`DuplicateColumnPolicy`）で決める。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// 列名リストから作成（重複はエラー）
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns = Self::new();
        for name in names {
            let name = name.into();
            if columns.push(name.clone()).is_err() {
                return Err(Error::DuplicateColumn(name));
            }
        }
        Ok(columns)
    }

    /// 列を末尾に追加
    ///
    /// 既に同名の列があれば追加せず、その位置を `Err` で返す。
    pub fn push(&mut self, name: String) -> std::result::Result<usize, usize> {
        if let Some(&existing) = self.index.get(&name) {
            return Err(existing);
        }
        let position = self.names.len();
        self.index.insert(name.clone(), position);
        self.names.push(name);
        Ok(position)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

/// 表データ
///
/// 各行は列数と同じ長さに揃える（短い行は `Empty` で埋める）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Columns,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Columns) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 列名と行データから作成
    pub fn from_rows<I, S>(names: I, rows: Vec<Vec<Cell>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(Columns::from_names(names)?);
        for row in rows {
            table.push_row(row);
        }
        Ok(table)
    }

    /// 行を追加（列数に合わせて切り詰め・補完）
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// 指定行・指定列のセル
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let position = self.columns.position(column)?;
        self.rows.get(row).and_then(|r| r.get(position))
    }

    /// 指定列の値を行順に列挙
    pub fn column_values<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a Cell> + 'a> {
        let position = self.columns.position(column)?;
        Some(self.rows.iter().map(move |row| &row[position]))
    }
}
