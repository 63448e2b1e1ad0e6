//! エラー型定義モジュール

use std::io;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("ディレクトリ作成エラー: {0}")]
    DirectoryCreationError(io::Error),

    #[error("設定値エラー: {0}")]
    InvalidValue(String),
}

/// データベースエラー
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLiteエラー: {0}")]
    SqliteError(#[from] rusqlite::Error),
}

/// 入力エラー
///
/// メッセージはそのままユーザーに表示される
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid time in seconds. It must be a non-negative integer.")]
    InvalidSeconds,

    #[error("Invalid tool name. It must not be empty.")]
    EmptyTool,
}

/// レポートエラー
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("データベースエラー: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("無効なタイムスタンプ: {0}")]
    InvalidTimestamp(String),

    #[error("出力エラー: {0}")]
    Output(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DirectoryCreationError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(err.to_string().contains("ディレクトリ作成エラー"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue("db_path must not be empty".to_string());
        assert!(err.to_string().contains("設定値エラー"));
        assert!(err.to_string().contains("db_path must not be empty"));
    }

    #[test]
    fn test_input_error_messages_are_user_facing() {
        let err = InputError::InvalidSeconds;
        assert_eq!(
            err.to_string(),
            "Invalid time in seconds. It must be a non-negative integer."
        );
        assert_eq!(
            InputError::EmptyTool.to_string(),
            "Invalid tool name. It must not be empty."
        );
    }

    #[test]
    fn test_report_error_display() {
        let err = ReportError::InvalidTimestamp("yesterday".to_string());
        assert!(err.to_string().contains("無効なタイムスタンプ"));
        assert!(err.to_string().contains("yesterday"));
    }
}
