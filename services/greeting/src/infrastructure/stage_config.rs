/// ステージ設定
///
/// 環境変数からアカウントIDとステージ名を読み込む。
/// 呼び出しごとに読み込むため、起動後の環境変数の変化も反映される。
use lambda_http::http::StatusCode;
use thiserror::Error;

/// アカウントIDの環境変数名
pub const ACCOUNT_ID_ENV: &str = "ACCOUNT_ID";

/// ステージ名の環境変数名
pub const STAGE_NAME_ENV: &str = "STAGE_NAME";

/// ステージ設定のエラー型
///
/// 表示文字列はそのままHTTPレスポンスの本文になる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageConfigError {
    /// ACCOUNT_IDが未定義
    #[error("ACCOUNT_ID is not defined")]
    MissingAccountId,

    /// STAGE_NAMEが未定義
    #[error("STAGE_NAME is not defined")]
    MissingStageName,
}

impl StageConfigError {
    /// 未定義だった環境変数名を取得
    pub fn env_name(&self) -> &'static str {
        match self {
            Self::MissingAccountId => ACCOUNT_ID_ENV,
            Self::MissingStageName => STAGE_NAME_ENV,
        }
    }

    /// レスポンスに使うHTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// アカウントIDとステージ名を持つ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConfig {
    /// アカウントID (ACCOUNT_ID環境変数)
    account_id: String,
    /// ステージ名 (STAGE_NAME環境変数)
    stage_name: String,
}

impl StageConfig {
    /// 明示的な値で作成（テスト用）
    pub fn new(account_id: impl Into<String>, stage_name: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            stage_name: stage_name.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// 環境変数:
    /// - ACCOUNT_ID: アカウントID
    /// - STAGE_NAME: ステージ名
    ///
    /// 未設定・空文字の値は未定義として扱う。
    /// 非Unicodeの値は設定済みとして扱い、不正なバイトは置換文字に変換する。
    pub fn from_env() -> Result<Self, StageConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// 任意のキー参照関数から設定を読み込み
    ///
    /// ACCOUNT_IDを先に検証するため、両方が未定義の場合は
    /// `MissingAccountId`が返る。
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, StageConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        // 空文字はNone扱い
        let mut get_defined = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let account_id = get_defined(ACCOUNT_ID_ENV).ok_or(StageConfigError::MissingAccountId)?;
        let stage_name = get_defined(STAGE_NAME_ENV).ok_or(StageConfigError::MissingStageName)?;

        Ok(Self {
            account_id,
            stage_name,
        })
    }

    /// アカウントIDを取得
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// ステージ名を取得
    pub fn stage_name(&self) -> &str {
        &self.stage_name
    }
}
