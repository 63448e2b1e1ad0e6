//! 記録コマンドの入力検証モジュール

use crate::error::InputError;

/// 検証済みの記録内容
#[derive(Debug, PartialEq, Eq)]
pub struct NewEntry {
    pub tool: String,
    pub seconds: u32,
}

impl NewEntry {
    /// コマンドライン引数から記録内容を組み立てる
    pub fn parse(tool: &str, seconds: &str) -> Result<Self, InputError> {
        Ok(Self {
            tool: parse_tool(tool)?,
            seconds: parse_seconds(seconds)?,
        })
    }
}

/// ツール名を検証（空白のみは不可）
pub fn parse_tool(tool: &str) -> Result<String, InputError> {
    if tool.trim().is_empty() {
        return Err(InputError::EmptyTool);
    }
    Ok(tool.to_string())
}

/// 秒数を10進の非負整数として解釈
///
/// 前後の空白と先頭の`+`は許容する。上限はi32::MAX
pub fn parse_seconds(text: &str) -> Result<u32, InputError> {
    let value: i32 = text
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidSeconds)?;

    u32::try_from(value).map_err(|_| InputError::InvalidSeconds)
}
