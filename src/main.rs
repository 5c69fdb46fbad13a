use clap::Parser;
use sheet_match::{cli, config, error, matcher, server};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut config = Config::load()?;
    if let Some(policy) = cli.duplicate_columns {
        config.duplicate_columns = policy;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(config).await?;
        }

        Commands::Columns { reference, input } => {
            let reference_bytes = matcher::read_upload_file(&reference)?;
            let input_bytes = matcher::read_upload_file(&input)?;

            let listing = matcher::inspect_columns(&reference_bytes, &input_bytes, config.duplicate_columns)?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }

        Commands::Match { reference, input, input_column, reference_column, return_columns, output } => {
            println!("📄 sheet-match - 照合\n");

            println!("[1/2] ファイルを読み込み中...");
            let job = matcher::MatchJob {
                reference: matcher::read_upload_file(&reference)?,
                input: matcher::read_upload_file(&input)?,
                reference_column,
                input_column,
                return_columns,
            };

            println!("[2/2] 照合中...");
            let result = matcher::run_match(&job, config.duplicate_columns)?;
            std::fs::write(&output, &result.workbook)?;

            println!("✔ {}行中 一致 {} / 不一致 {}", result.stats.total, result.stats.matched, result.stats.unmatched);
            println!("✔ 結果を保存: {}", output.display());
        }

        Commands::Config { set_host, set_port, set_duplicate_columns, show } => {
            let mut config = Config::load_file()?;
            let changed = set_host.is_some() || set_port.is_some() || set_duplicate_columns.is_some();

            if let Some(host) = set_host {
                config.host = host;
            }
            if let Some(port) = set_port {
                config.port = port;
            }
            if let Some(policy) = set_duplicate_columns {
                config.duplicate_columns = policy;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  ホスト: {}", config.host);
                println!("  ポート: {}", config.port);
                println!("  アップロード上限: {}MiB", config.max_upload_mb);
                println!("  列名重複: {}", config.duplicate_columns);
            }
        }
    }

    Ok(())
}
