// インフラストラクチャ層モジュール
pub mod logging;
pub mod stage_config;

// 再エクスポート
pub use logging::{init_logging, invocation_span};
pub use stage_config::{StageConfig, StageConfigError, ACCOUNT_ID_ENV, STAGE_NAME_ENV};
