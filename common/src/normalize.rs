//! 列名・照合キーの正規化モジュール
//!
//! - 列名: 前後の空白を除去して小文字化
//! - 照合キー: セル値を文字列化してから同じ正規化を適用
//!
//! 列名の正規化は取り込み直後に一度だけ行い、以降の列参照はすべて正規化後の名前で行う。

use crate::error::{Error, Result};
use crate::types::{Cell, Columns, Table};
use serde::{Deserialize, Serialize};

/// 正規化で列名が重複した場合の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateColumnPolicy {
    /// 取り込みエラーにする
    #[default]
    Reject,
    /// 後の列のデータで上書き（列の位置は最初の出現位置）
    LastWins,
}

impl std::str::FromStr for DuplicateColumnPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(DuplicateColumnPolicy::Reject),
            "last-wins" | "last_wins" | "last" => Ok(DuplicateColumnPolicy::LastWins),
            _ => Err(format!("Unknown duplicate column policy: {}. Use reject or last-wins", s)),
        }
    }
}

impl std::fmt::Display for DuplicateColumnPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateColumnPolicy::Reject => write!(f, "reject"),
            DuplicateColumnPolicy::LastWins => write!(f, "last-wins"),
        }
    }
}

/// 列名を正規化（trim + 小文字化）
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 列名リストを正規化
pub fn normalize_column_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize_column_name(name.as_ref()))
        .collect()
}

/// ヘッダセルから列名を決める
///
/// 空のヘッダは `unnamed: {位置}` とする。
pub fn header_name(cell: &Cell, position: usize) -> String {
    let raw = match cell {
        Cell::Number(n) => format_number(*n),
        other => other.to_string(),
    };
    let name = normalize_column_name(&raw);
    if name.is_empty() {
        format!("unnamed: {}", position)
    } else {
        name
    }
}

/// 生のヘッダ行とデータ行から正規化済みの表を組み立てる
///
/// # Arguments
/// * `header` - ヘッダ行のセル
/// * `rows` - データ行（ヘッダより短い行は `Empty` で補完）
/// * `policy` - 列名重複時の扱い
pub fn build_table(header: &[Cell], rows: Vec<Vec<Cell>>, policy: DuplicateColumnPolicy) -> Result<Table> {
    let mut columns = Columns::new();
    // 出力列の位置 → 元データの列位置
    let mut sources: Vec<usize> = Vec::with_capacity(header.len());

    for (position, cell) in header.iter().enumerate() {
        let name = header_name(cell, position);
        match columns.push(name.clone()) {
            Ok(_) => sources.push(position),
            Err(existing) => match policy {
                DuplicateColumnPolicy::Reject => return Err(Error::DuplicateColumn(name)),
                DuplicateColumnPolicy::LastWins => sources[existing] = position,
            },
        }
    }

    let mut table = Table::new(columns);
    for row in rows {
        let projected = sources
            .iter()
            .map(|&source| row.get(source).cloned().unwrap_or_default())
            .collect();
        table.push_row(projected);
    }

    Ok(table)
}

/// 照合キーを作成
///
/// 文字列化 → trim → 小文字化。数値は `format_number` で文字列化するので
/// `42` と `"42"` は同じキーになる。空セルは空文字列。
pub fn match_key(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.trim().to_lowercase(),
        Cell::Number(n) => format_number(*n).to_lowercase(),
        Cell::Empty => String::new(),
    }
}

/// 数値をロケール非依存の文字列にする
///
/// 整数値（i64の範囲）は小数点なし、それ以外は最短の往復可能な表記。
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        return format!("{}", n as i64);
    }
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Email Address "), "email address");
        assert_eq!(normalize_column_name("ID"), "id");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_normalize_column_names_idempotent() {
        let names = vec![" Account ID", "EMAIL", "name  "];
        let once = normalize_column_names(&names);
        let twice = normalize_column_names(&once);
        assert_eq!(once, vec!["account id", "email", "name"]);
        assert_eq!(once, twice);

        let empty: Vec<String> = Vec::new();
        assert!(normalize_column_names(&empty).is_empty());
    }

    #[test]
    fn test_header_name_placeholders() {
        assert_eq!(header_name(&Cell::Empty, 3), "unnamed: 3");
        assert_eq!(header_name(&Cell::from("   "), 0), "unnamed: 0");
        assert_eq!(header_name(&Cell::Number(2024.0), 1), "2024");
        assert_eq!(header_name(&Cell::from(" Name "), 2), "name");
    }

    #[test]
    fn test_match_key_case_and_whitespace() {
        assert_eq!(match_key(&Cell::from(" Acme Corp ")), "acme corp");
        assert_eq!(match_key(&Cell::from("acme corp")), "acme corp");
        assert_eq!(match_key(&Cell::Empty), "");
    }

    #[test]
    fn test_match_key_numbers() {
        assert_eq!(match_key(&Cell::Number(42.0)), match_key(&Cell::from("42")));
        assert_eq!(match_key(&Cell::Number(-0.0)), "0");
        assert_eq!(match_key(&Cell::Number(3.5)), "3.5");
        assert_eq!(match_key(&Cell::Number(0.1)), "0.1");
        assert_eq!(match_key(&Cell::Number(-17.0)), "-17");
        assert_eq!(match_key(&Cell::Number(f64::NAN)), "nan");
        assert_eq!(match_key(&Cell::Number(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_format_number_large_values() {
        assert_eq!(format_number(1e15), "1000000000000000");
        // i64の範囲外は浮動小数点表記のまま
        assert_eq!(format_number(1e300), format!("{}", 1e300));
    }

    #[test]
    fn test_build_table_normalizes_header() {
        let header = vec![Cell::from(" ID "), Cell::from("Email")];
        let rows = vec![vec![Cell::from("A1"), Cell::from("x@y.com")]];
        let table = build_table(&header, rows, DuplicateColumnPolicy::Reject).unwrap();

        assert_eq!(table.columns().names(), &["id", "email"]);
        assert_eq!(table.cell(0, "email"), Some(&Cell::from("x@y.com")));
    }

    #[test]
    fn test_build_table_rejects_duplicates() {
        let header = vec![Cell::from("Email"), Cell::from(" email ")];
        let err = build_table(&header, Vec::new(), DuplicateColumnPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumn(name) if name == "email"));
    }

    #[test]
    fn test_build_table_last_wins() {
        let header = vec![Cell::from("Email"), Cell::from("id"), Cell::from("EMAIL")];
        let rows = vec![vec![Cell::from("old@x"), Cell::from("A1"), Cell::from("new@x")]];
        let table = build_table(&header, rows, DuplicateColumnPolicy::LastWins).unwrap();

        assert_eq!(table.columns().names(), &["email", "id"]);
        assert_eq!(table.cell(0, "email"), Some(&Cell::from("new@x")));
        assert_eq!(table.cell(0, "id"), Some(&Cell::from("A1")));
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("reject".parse::<DuplicateColumnPolicy>(), Ok(DuplicateColumnPolicy::Reject));
        assert_eq!("Last-Wins".parse::<DuplicateColumnPolicy>(), Ok(DuplicateColumnPolicy::LastWins));
        assert!("first".parse::<DuplicateColumnPolicy>().is_err());
        assert_eq!(DuplicateColumnPolicy::LastWins.to_string(), "last-wins");
    }
}
