// 挨拶レスポンス生成ハンドラー
//
// ステージ設定から挨拶メッセージを組み立て、HTTPレスポンスに変換する。
// 設定の読み込み失敗もここで500レスポンスに変換し、呼び出し元にエラーを返さない。

use crate::domain::Greeting;
use crate::infrastructure::{StageConfig, StageConfigError};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};

/// 挨拶レスポンス生成ハンドラー
pub struct GreetingHandler {
    /// ステージ設定
    config: StageConfig,
}

impl GreetingHandler {
    /// 新しいハンドラーを作成
    ///
    /// # Arguments
    /// * `config` - ステージ設定
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    /// 設定から挨拶メッセージを生成
    pub fn greeting(&self) -> Greeting {
        Greeting::new(self.config.stage_name(), self.config.account_id())
    }

    /// 挨拶を本文とするHTTP 200レスポンスを生成
    pub fn handle(&self) -> Response<Body> {
        text_response(StatusCode::OK, self.greeting().to_string())
    }

    /// 設定エラーをHTTPレスポンスに変換
    ///
    /// 本文はエラーの表示文字列（例: "ACCOUNT_ID is not defined"）。
    pub fn error_response(error: &StageConfigError) -> Response<Body> {
        text_response(error.status_code(), error.to_string())
    }
}

/// 設定の読み込み結果からレスポンスを生成
///
/// - 設定あり: 200 + 挨拶
/// - 設定エラー: 500 + エラーメッセージ
pub fn respond(config: Result<StageConfig, StageConfigError>) -> Response<Body> {
    match config {
        Ok(config) => GreetingHandler::new(config).handle(),
        Err(err) => GreetingHandler::error_response(&err),
    }
}

// Response::builderと違い失敗しない
fn text_response(status: StatusCode, body: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    response
}
