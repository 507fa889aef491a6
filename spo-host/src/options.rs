//! 式評価オプション

use crate::Language;

/// 式評価時のオプション
///
/// デフォルトはフレームの言語で評価し、結果の型変換を行いません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpressionOptions {
    /// 評価に使う言語（Noneならフレームの言語）
    pub language: Option<Language>,
    /// 結果を汎用オブジェクト参照型（`id`）に変換するか
    pub coerce_to_id: bool,
}

impl ExpressionOptions {
    /// デフォルトのオプションを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 評価言語を指定する
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// 結果をオブジェクト参照型に変換する
    pub fn coerce_result_to_id(mut self) -> Self {
        self.coerce_to_id = true;
        self
    }
}
