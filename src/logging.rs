//! ログインフラモジュール

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 標準出力はコマンドの結果専用なので、ログは常にstderrへ出す
const DEFAULT_FILTER: &str = "warn";

/// ログシステムを初期化
///
/// RUST_LOG環境変数でログレベルを設定可能（デフォルトはwarn）:
/// - info: 記録・集計の実行内容
/// - debug: データベースパスやスキーマ作成の詳細
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
