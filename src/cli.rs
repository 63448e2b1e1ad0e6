//! CLIモジュール

use crate::config::{CliArgs, Config, SortOrder};
use crate::database::Database;
use crate::record::NewEntry;
use crate::report::Report;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// 引数が不正なときに表示する使い方
const USAGE: &str = "\
Usage: timesaved <mode>
Where <mode> is one of the following:
record
read
Record usage: timesaved record <tool> <timeInSeconds>
Read usage: timesaved read [--sort <tool|duration>]";

/// Record Time Saved - ツールごとの節約時間を記録・集計
#[derive(Parser, Debug)]
#[command(name = "timesaved", version)]
#[command(about = "ツールごとの節約時間を記録・集計", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// データベースファイルのパス（設定ファイルより優先）
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 節約した時間を記録
    ///
    /// `-h`のようなツール名も記録できるようにヘルプフラグは無効
    #[command(disable_help_flag = true)]
    Record {
        /// ツール名
        #[arg(allow_hyphen_values = true)]
        tool: String,

        /// 節約した時間（秒、0以上の整数）
        #[arg(allow_hyphen_values = true, value_name = "TIME_IN_SECONDS")]
        seconds: String,
    },
    /// ツール別の節約時間を表示
    Read {
        /// 表示順
        #[arg(short, long, value_enum)]
        sort: Option<SortOrder>,

        /// 余分な引数は無視する
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        ignored: Vec<String>,
    },
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// 引数を解析してコマンドを実行
///
/// 不正な引数と`--help`は使い方を表示して正常終了する
pub fn run_with<I, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let args = normalize_mode(args.into_iter().collect());

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            write!(out, "{}", e.render())?;
            return Ok(());
        }
        Err(e) => {
            debug!("引数の解析に失敗しました: {:?}", e.kind());
            writeln!(out, "{}", USAGE)?;
            return Ok(());
        }
    };

    execute(cli, out)
}

/// サブコマンドを実行
fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        None => {
            writeln!(out, "{}", USAGE)?;
        }
        Some(Commands::Record { tool, seconds }) => {
            // 入力が不正ならデータベースには触れない
            let entry = match NewEntry::parse(&tool, &seconds) {
                Ok(entry) => entry,
                Err(e) => {
                    info!("記録を中止しました: {:?}", e);
                    writeln!(out, "{}", e)?;
                    return Ok(());
                }
            };

            let config = Config::load(&CliArgs {
                db: cli.db,
                sort: None,
            })?;
            let db = Database::open(&config.db_path)?;
            db.insert_entry(&entry.tool, entry.seconds)?;
            db.close()?;
        }
        Some(Commands::Read { sort, ignored }) => {
            if !ignored.is_empty() {
                debug!("readの余分な引数を無視します: {:?}", ignored);
            }
            let config = Config::load(&CliArgs { db: cli.db, sort })?;
            let db = Database::open(&config.db_path)?;
            Report::new(&db, config.sort).write_to(out)?;
            db.close()?;
        }
    }

    Ok(())
}

/// モード名（最初の位置引数）を小文字に揃える
fn normalize_mode(mut args: Vec<OsString>) -> Vec<OsString> {
    let mut skip_value = false;

    for arg in args.iter_mut().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }
        let Some(text) = arg.to_str() else {
            break;
        };
        if text == "--db" {
            skip_value = true;
            continue;
        }
        if text.starts_with('-') {
            continue;
        }

        let lower = text.to_lowercase();
        if lower == "record" || lower == "read" {
            *arg = OsString::from(lower);
        }
        break;
    }

    args
}
