// ドメイン層モジュール
pub mod greeting;

// 再エクスポート
pub use greeting::{account_suffix, Greeting};
