//! レポートモジュール

use crate::config::SortOrder;
use crate::database::{Database, ToolTotal};
use crate::error::ReportError;
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::io::Write;
use tracing::{info, warn};

/// SQLiteのCURRENT_TIMESTAMPの形式
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 記録がないときの表示
pub const NO_RECORDS_MESSAGE: &str = "No time saved records found.";

/// 集計結果
#[derive(Debug)]
pub struct Summary {
    /// 最も古い記録の日付（ローカル時刻）
    pub since: NaiveDate,
    pub totals: Vec<ToolTotal>,
}

/// レポート生成
pub struct Report<'a> {
    db: &'a Database,
    sort: SortOrder,
}

impl<'a> Report<'a> {
    /// 新しいReportを作成
    pub fn new(db: &'a Database, sort: SortOrder) -> Self {
        Self { db, sort }
    }

    /// 集計結果を取得（記録がなければNone）
    pub fn summary(&self) -> Result<Option<Summary>, ReportError> {
        let Some(earliest) = self.db.earliest_created_on()? else {
            return Ok(None);
        };

        let since = parse_created_on(&earliest)?;
        let totals = self.db.time_by_tool(self.sort)?;
        info!("{}件のツールを集計しました", totals.len());

        Ok(Some(Summary { since, totals }))
    }

    /// レポートを出力
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let lines = match self.summary()? {
            Some(summary) => render(&summary),
            None => vec![NO_RECORDS_MESSAGE.to_string()],
        };

        for line in lines {
            writeln!(out, "{}", line).map_err(ReportError::Output)?;
        }
        Ok(())
    }
}

/// 集計結果を表示用の行に変換
pub fn render(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.totals.len() + 1);
    lines.push(format!(
        "Time saved by tool since {}:",
        summary.since.format("%Y-%m-%d")
    ));
    for total in &summary.totals {
        let seconds = u64::try_from(total.total_seconds).unwrap_or_else(|_| {
            warn!(
                "{}の合計時間が負の値です（{}秒）。0秒として表示します",
                total.tool, total.total_seconds
            );
            0
        });
        lines.push(format!("{}: {}", total.tool, humanize_duration(seconds)));
    }
    lines
}

/// CreatedOn（UTC）をローカル日付に変換
fn parse_created_on(value: &str) -> Result<NaiveDate, ReportError> {
    let naive = NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP_FORMAT)
        .map_err(|_| ReportError::InvalidTimestamp(value.to_string()))?;

    Ok(Utc.from_utc_datetime(&naive).with_timezone(&Local).date_naive())
}

/// 秒を最大の単位1つで表す（切り捨て）
pub fn humanize_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{} seconds", seconds)
    } else if seconds < 3600 {
        format!("{} minutes", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours", seconds / 3600)
    } else {
        format!("{} days", seconds / 86400)
    }
}
