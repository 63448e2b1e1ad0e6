//! データベースモジュール

use crate::config::SortOrder;
use crate::error::DatabaseError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

/// 節約時間を記録するテーブル名
const TABLE_NAME: &str = "TimeSaved";

/// ツール別の合計時間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolTotal {
    pub tool: String,
    pub total_seconds: i64,
}

/// データベース管理
pub struct Database {
    conn: Connection,
}

impl Database {
    /// データベースを開く（必要に応じて作成）
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        debug!("データベースを開きます: {}", path.display());
        let conn = Connection::open(path)?;

        let db = Database { conn };
        db.ensure_schema()?;

        Ok(db)
    }

    /// テーブルが存在するか確認
    pub fn table_exists(&self) -> Result<bool, DatabaseError> {
        let found = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                params![TABLE_NAME],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    /// スキーマを初期化
    ///
    /// 既存のテーブルと行はそのまま残る
    pub fn ensure_schema(&self) -> Result<(), DatabaseError> {
        if !self.table_exists()? {
            debug!("{}テーブルを作成します", TABLE_NAME);
        }

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS TimeSaved (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                Tool TEXT NOT NULL,
                TimeInSeconds INTEGER NOT NULL,
                CreatedOn DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        Ok(())
    }

    /// 節約時間を1件挿入
    ///
    /// CreatedOnはSQLiteが挿入時刻（UTC）で埋める
    pub fn insert_entry(&self, tool: &str, seconds: u32) -> Result<i64, DatabaseError> {
        self.conn.execute(
            "INSERT INTO TimeSaved (Tool, TimeInSeconds) VALUES (?1, ?2)",
            params![tool, i64::from(seconds)],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("記録しました: id={} tool={} seconds={}", id, tool, seconds);
        Ok(id)
    }

    /// ツール別の合計時間を取得
    pub fn time_by_tool(&self, sort: SortOrder) -> Result<Vec<ToolTotal>, DatabaseError> {
        let sql = match sort {
            SortOrder::Tool => {
                "SELECT Tool, SUM(TimeInSeconds) AS total FROM TimeSaved GROUP BY Tool ORDER BY Tool ASC"
            }
            SortOrder::Duration => {
                "SELECT Tool, SUM(TimeInSeconds) AS total FROM TimeSaved GROUP BY Tool ORDER BY total DESC, Tool ASC"
            }
        };

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(ToolTotal {
                tool: row.get(0)?,
                total_seconds: row.get(1)?,
            })
        })?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }

        Ok(totals)
    }

    /// 最も古い記録のCreatedOnを取得（記録がなければNone）
    pub fn earliest_created_on(&self) -> Result<Option<String>, DatabaseError> {
        let earliest = self
            .conn
            .query_row("SELECT MIN(CreatedOn) FROM TimeSaved", [], |row| {
                row.get::<_, Option<String>>(0)
            })?;

        Ok(earliest)
    }

    /// 接続を明示的に閉じる
    pub fn close(self) -> Result<(), DatabaseError> {
        self.conn.close().map_err(|(_, e)| DatabaseError::SqliteError(e))
    }
}
