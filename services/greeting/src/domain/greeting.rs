// 挨拶メッセージのドメインモデル
//
// ステージ名とアカウントIDの末尾から挨拶文を組み立てる。
// 外部I/Oを持たない純粋なロジックのみを置く。

use std::fmt;

/// アカウントIDから取り出す末尾の文字数
const ACCOUNT_SUFFIX_LENGTH: usize = 4;

/// アカウントIDの末尾4文字を返す
///
/// アカウントIDは不透明な文字列として扱い、数値としての検証は行わない。
/// 文字単位で切り出すため、マルチバイト文字を含んでいてもパニックしない。
/// 4文字未満の場合は文字列全体を返す。
///
/// # Arguments
/// * `account_id` - アカウントID
///
/// # Returns
/// 末尾最大4文字のスライス
pub fn account_suffix(account_id: &str) -> &str {
    let start = account_id
        .char_indices()
        .rev()
        .nth(ACCOUNT_SUFFIX_LENGTH - 1)
        .map(|(index, _)| index)
        .unwrap_or(0);

    &account_id[start..]
}

/// 挨拶メッセージ
///
/// `Hello from {stage} ({suffix})!` 形式で表示される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// ステージ名
    stage_name: String,
    /// アカウントIDの末尾4文字
    account_suffix: String,
}

impl Greeting {
    /// ステージ名とアカウントIDから挨拶を作成
    pub fn new(stage_name: &str, account_id: &str) -> Self {
        Self {
            stage_name: stage_name.to_string(),
            account_suffix: account_suffix(account_id).to_string(),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello from {} ({})!", self.stage_name, self.account_suffix)
    }
}
