use clap::{Parser, Subcommand};
use sheet_match_common::DuplicateColumnPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheet-match")]
#[command(about = "2つのスプレッドシートを列の値で照合するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 列名が正規化で重複した場合の扱い (reject/last-wins)
    #[arg(long, global = true)]
    pub duplicate_columns: Option<DuplicateColumnPolicy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Webサーバを起動
    Serve {
        /// 待ち受けホスト
        #[arg(long)]
        host: Option<String>,

        /// 待ち受けポート
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// 2ファイルの列名をJSONで表示
    Columns {
        /// 参照ファイル（file1）
        #[arg(required = true)]
        reference: PathBuf,

        /// 入力ファイル（file2）
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 2ファイルを照合して結果をxlsxに出力
    Match {
        /// 参照ファイル（file1）
        #[arg(required = true)]
        reference: PathBuf,

        /// 入力ファイル（file2）
        #[arg(required = true)]
        input: PathBuf,

        /// 入力ファイルの照合列
        #[arg(short = 'i', long)]
        input_column: String,

        /// 参照ファイルの照合列
        #[arg(short = 'r', long)]
        reference_column: String,

        /// 結果に含める参照ファイルの列（複数指定可）
        #[arg(short = 'c', long = "return-column")]
        return_columns: Vec<String>,

        /// 出力ファイル
        #[arg(short, long, default_value = "matched_results.xlsx")]
        output: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 待ち受けホストを設定
        #[arg(long)]
        set_host: Option<String>,

        /// 待ち受けポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// 列名重複時の扱いを設定 (reject/last-wins)
        #[arg(long)]
        set_duplicate_columns: Option<DuplicateColumnPolicy>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
