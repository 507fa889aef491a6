//! 実行フレームの機能抽象

use crate::{ExpressionOptions, Language, ValueObject};

/// ホストデバッガの実行フレーム
///
/// フレームはホストが所有し、このトレイトを通じて読み取り専用で使います。
/// 評価の失敗は `ValueObject::error` で報告され、パニックやエラー型にはなりません。
pub trait Frame {
    /// フレームのソース言語を推定する
    fn guess_language(&self) -> Language;

    /// 式をフレーム上で評価する
    fn evaluate_expression(&self, expression: &str, options: &ExpressionOptions) -> ValueObject;

    /// 変数パス（`a.b.c`）を評価器を使わずに解決する
    fn get_value_for_variable_path(&self, path: &str) -> ValueObject;
}
