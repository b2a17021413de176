/// 挨拶HTTP Lambdaエントリポイント
///
/// API Gateway HTTP API / Lambda Function URL経由のリクエストを処理し、
/// ステージ名とアカウントIDの末尾4文字を含む挨拶を返却する。
/// 設定は起動時ではなく呼び出しごとに環境変数から読み込む。
use greeting::application::respond;
use greeting::infrastructure::{init_logging, invocation_span, StageConfig};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("挨拶Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// リクエストの内容は使用しない。設定エラーも含めて常にレスポンスを返し、
/// `Err`は返さない。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let request_id = request
        .lambda_context_ref()
        .map(|context| context.request_id.clone());
    let span = invocation_span(request_id.as_deref());
    let _guard = span.enter();

    debug!(method = %request.method(), path = %request.uri().path(), "リクエスト受信");

    // 環境変数から設定を読み込み
    let config = StageConfig::from_env();

    match &config {
        Ok(config) => info!(stage_name = config.stage_name(), "挨拶を返却"),
        Err(err) => warn!(missing = err.env_name(), error = %err, "設定が未定義"),
    }

    Ok(respond(config))
}
