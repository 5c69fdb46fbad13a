//! Excel生成（共通ライブラリ）
//!
//! `Table` を1シートのxlsxにする。1行目は太字の列名、以降は1行ずつデータ。

use crate::error::{Error, Result};
use crate::types::{Cell, Table};
use rust_xlsxwriter::*;

/// 出力シート名
pub const RESULT_SHEET_NAME: &str = "Results";

/// 表をxlsxのバイト列に書き出す
///
/// 文字列は文字列セル、数値は数値セル、空セル・空文字列は書き込まない。
pub fn write_table(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(RESULT_SHEET_NAME)
        .map_err(|e| Error::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, column_number(col)?, name, &header_format)
            .map_err(|e| Error::ExcelGeneration(format!("ヘッダ書き込みエラー: {}", e)))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1)
            .map_err(|_| Error::ExcelGeneration(format!("行数が多すぎます: {}", row_idx + 1)))?;

        for (col, cell) in row.iter().enumerate() {
            let col_num = column_number(col)?;
            if cell.is_blank() {
                continue;
            }
            let written = match cell {
                Cell::Text(s) => worksheet.write_string(row_num, col_num, s),
                Cell::Number(n) => worksheet.write_number(row_num, col_num, *n),
                Cell::Empty => continue,
            };
            written.map_err(|e| Error::ExcelGeneration(format!("セル書き込みエラー: {}", e)))?;
        }
    }

    worksheet.autofit();

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| Error::ExcelGeneration(format!("Excel保存エラー: {}", e)))
}

fn column_number(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| Error::ExcelGeneration(format!("列数が多すぎます: {}", col + 1)))
}
