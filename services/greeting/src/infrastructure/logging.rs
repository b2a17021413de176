/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// CloudWatch Logsで検索しやすいようにJSON形式で出力する。
use std::sync::Once;

use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// `RUST_LOG`未設定時のログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// 環境変数`RUST_LOG`でフィルタリングし、未設定ならinfoレベルで出力する。
/// 複数回呼び出しても最初の呼び出しのみ初期化を実行する。
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        // JSON形式のログレイヤー（Lambda/CloudWatch向け）
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(true);

        // サブスクライバーを構築して初期化
        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .init();
    });
}

/// 1回の呼び出しに対応するspanを作成する
///
/// Lambdaコンテキストが取得できない場合、request_idは"unknown"になる。
pub fn invocation_span(request_id: Option<&str>) -> Span {
    tracing::info_span!("invocation", request_id = request_id.unwrap_or("unknown"))
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_idempotent() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    /// JSON形式の設定自体がエラーにならないことを確認
    #[test]
    fn test_json_logging_configuration() {
        let env_filter = EnvFilter::new(DEFAULT_LOG_LEVEL);
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .flatten_event(true);

        let _subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer);
    }

    #[test]
    fn test_invocation_span_with_request_id() {
        init_test_logging();

        let span = invocation_span(Some("req-12345"));
        let _guard = span.enter();

        tracing::info!(stage_name = "foo", "挨拶を返却");
    }

    #[test]
    fn test_invocation_span_without_request_id() {
        init_test_logging();

        let span = invocation_span(None);
        let _guard = span.enter();

        tracing::warn!(missing = "ACCOUNT_ID", "設定が未定義");
    }
}
