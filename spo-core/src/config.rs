//! spo の動作設定

use spo_host::Language;

/// spo コマンドの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoConfig {
    /// 戦略チェーンを適用する言語
    pub specialized_language: Language,
    /// アドレス式を評価するときに強制する言語
    pub address_language: Language,
    /// 単純な変数パスだけを変数パス解決に回す
    ///
    /// falseにすると、一般の式も変数パス解決を試してからprintに回します。
    pub variable_path_guard: bool,
    /// print フォールバックの失敗を出力する
    pub report_fallback_errors: bool,
}

impl Default for PoConfig {
    fn default() -> Self {
        Self {
            specialized_language: Language::Swift,
            address_language: Language::ObjC,
            variable_path_guard: true,
            report_fallback_errors: true,
        }
    }
}
