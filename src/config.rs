//! 設定モジュール

use crate::error::ConfigError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// アプリケーションデータ用のディレクトリ名
const APP_DIR_NAME: &str = "TimeSaved";
/// データベースファイル名
const DB_FILE_NAME: &str = "TimeSaved.db";
/// 設定ファイル名
const CONFIG_FILE_NAME: &str = "config.toml";

/// 集計結果の並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// ツール名順
    #[default]
    Tool,
    /// 合計時間の長い順
    Duration,
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// データベースファイルパス
    pub db_path: PathBuf,
    /// readコマンドの並び順
    pub sort: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: app_dir().join(DB_FILE_NAME),
            sort: SortOrder::default(),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    db_path: Option<String>,
    sort: Option<SortOrder>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub db: Option<PathBuf>,
    pub sort: Option<SortOrder>,
}

/// ユーザーごとのアプリケーションデータディレクトリ
///
/// 解決できない環境ではカレントディレクトリ配下を使う
fn app_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load_from(&app_dir().join(CONFIG_FILE_NAME), cli_args)
    }

    /// 指定した設定ファイルから読み込む
    fn load_from(config_path: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if config_path.exists() {
            let content = fs::read_to_string(config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        config.merge_cli_args(cli_args);
        config.validate()?;
        config.ensure_directories()?;

        Ok(config)
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(ref path) = file_config.db_path {
            self.db_path = PathBuf::from(path);
        }
        if let Some(sort) = file_config.sort {
            self.sort = sort;
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(ref path) = cli_args.db {
            self.db_path = path.clone();
        }
        if let Some(sort) = cli_args.sort {
            self.sort = sort;
        }
    }

    /// 設定値をバリデート
    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "db_pathが空です".to_string(),
            ));
        }
        Ok(())
    }

    /// データベースの親ディレクトリを作成
    fn ensure_directories(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ConfigError::DirectoryCreationError)?;
            }
        }
        Ok(())
    }
}
