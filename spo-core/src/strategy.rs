//! 評価戦略
//!
//! 各戦略は1回の評価を試し、その結果を `EvaluationOutcome` として返します。
//! どの戦略で終了するかは `PoCommand` が決めます。

use crate::errors::is_description_error;
use crate::PoConfig;
use spo_host::{ExpressionOptions, Frame};
use tracing::debug;

/// 1つの戦略を試した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationOutcome {
    /// 使える説明文が得られた
    Described(String),
    /// 失敗、または使える説明文がない（何も出力しない）
    Invalid,
    /// 評価器が明示的なエラーを返した
    Error(String),
}

/// アドレス式をオブジェクト参照として評価する
///
/// 常にこの戦略で終了します。説明文が空の場合は入力した式をそのまま返します。
pub fn evaluate_address(frame: &dyn Frame, expression: &str, config: &PoConfig) -> EvaluationOutcome {
    let options = ExpressionOptions::new()
        .with_language(config.address_language)
        .coerce_result_to_id();
    let value = frame.evaluate_expression(expression, &options);

    if value.description.is_empty() {
        debug!("address '{}' has no description, echoing input", expression);
        EvaluationOutcome::Described(expression.to_string())
    } else {
        EvaluationOutcome::Described(value.description)
    }
}

/// 変数パスとして解決する（`frame variable` 相当）
///
/// 評価器を使わないので任意のコードを実行せず、余計な強参照も作りません。
/// 解決に失敗した場合、説明文が空の場合、説明文がエラー報告の場合は `Invalid` です。
pub fn resolve_variable_path(frame: &dyn Frame, expression: &str) -> EvaluationOutcome {
    let value = frame.get_value_for_variable_path(expression);
    if !value.is_valid() {
        debug!(
            "variable path '{}' did not resolve: {}",
            expression,
            value.error.description()
        );
        return EvaluationOutcome::Invalid;
    }

    let description = value.description.trim_end();
    if description.is_empty() {
        debug!("variable path '{}' has an empty description", expression);
        return EvaluationOutcome::Invalid;
    }
    if is_description_error(description) {
        debug!("variable path '{}' produced an error description", expression);
        return EvaluationOutcome::Invalid;
    }

    EvaluationOutcome::Described(description.to_string())
}

/// 言語の `print()` で出力させる
///
/// 説明文はホスト側の出力に書かれるので、成功時は何も返しません。
/// 失敗時は診断メッセージを返します（設定で抑止できます）。
pub fn print_fallback(frame: &dyn Frame, expression: &str, config: &PoConfig) -> EvaluationOutcome {
    let print_expression = format!("print({})", expression);
    let value = frame.evaluate_expression(&print_expression, &ExpressionOptions::new());

    if value.error.is_success() {
        return EvaluationOutcome::Invalid;
    }

    if config.report_fallback_errors {
        EvaluationOutcome::Error(value.error.description().to_string())
    } else {
        debug!("suppressing print fallback error for '{}'", expression);
        EvaluationOutcome::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spo_host::{FixtureFrame, Language};

    #[test]
    fn test_variable_path_trims_trailing_whitespace() {
        let frame = FixtureFrame::new(Language::Swift).with_variable("name", "\"kokia\"\n  ");
        assert_eq!(
            resolve_variable_path(&frame, "name"),
            EvaluationOutcome::Described("\"kokia\"".to_string())
        );
    }

    #[test]
    fn test_variable_path_whitespace_only_is_invalid() {
        let frame = FixtureFrame::new(Language::Swift).with_variable("blank", " \n");
        assert_eq!(resolve_variable_path(&frame, "blank"), EvaluationOutcome::Invalid);
    }

    #[test]
    fn test_variable_path_unresolved_is_invalid() {
        let frame = FixtureFrame::new(Language::Swift);
        assert_eq!(resolve_variable_path(&frame, "missing"), EvaluationOutcome::Invalid);
    }

    #[test]
    fn test_print_fallback_success_is_silent() {
        let frame = FixtureFrame::new(Language::Swift).with_variable("x", "1");
        let outcome = print_fallback(&frame, "x", &PoConfig::default());
        assert_eq!(outcome, EvaluationOutcome::Invalid);
        assert_eq!(frame.take_console(), vec!["1".to_string()]);
    }

    #[test]
    fn test_print_fallback_error_can_be_suppressed() {
        let frame = FixtureFrame::new(Language::Swift);
        let config = PoConfig {
            report_fallback_errors: false,
            ..PoConfig::default()
        };
        assert_eq!(print_fallback(&frame, "nope()", &config), EvaluationOutcome::Invalid);
    }
}
