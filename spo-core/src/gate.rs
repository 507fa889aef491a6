//! 言語による分岐

use crate::{EvaluationOutcome, PoConfig};
use spo_host::{ExpressionOptions, Frame};
use tracing::debug;

/// フレームの言語に戦略チェーンを適用するかどうか
pub fn requires_po_chain(frame: &dyn Frame, config: &PoConfig) -> bool {
    let language = frame.guess_language();
    let applies = language == config.specialized_language;
    debug!("frame language {} (chain applies: {})", language, applies);
    applies
}

/// 通常の `po` と同じく、デフォルトオプションで1回だけ評価する
///
/// 評価器の説明文はエラーも含めてそのまま返します。
/// 説明文のない失敗は診断メッセージを返します。
pub fn evaluate_generic(frame: &dyn Frame, expression: &str) -> EvaluationOutcome {
    let value = frame.evaluate_expression(expression, &ExpressionOptions::new());
    if value.error.is_failure() && value.description.is_empty() {
        return EvaluationOutcome::Error(value.error.description().to_string());
    }
    EvaluationOutcome::Described(value.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spo_host::{FixtureFrame, Language};

    #[test]
    fn test_gate_follows_config() {
        let config = PoConfig::default();
        assert!(requires_po_chain(&FixtureFrame::new(Language::Swift), &config));
        assert!(!requires_po_chain(&FixtureFrame::new(Language::ObjC), &config));
        assert!(!requires_po_chain(&FixtureFrame::new(Language::Unknown), &config));

        let rust_config = PoConfig {
            specialized_language: Language::Rust,
            ..PoConfig::default()
        };
        assert!(requires_po_chain(&FixtureFrame::new(Language::Rust), &rust_config));
    }

    #[test]
    fn test_generic_failure_returns_diagnostic() {
        let frame = FixtureFrame::new(Language::C).with_variable("x", "7");

        assert_eq!(
            evaluate_generic(&frame, "x"),
            EvaluationOutcome::Described("7".to_string())
        );
        assert_eq!(
            evaluate_generic(&frame, "missing"),
            EvaluationOutcome::Error("error: cannot find 'missing' in scope".to_string())
        );
    }

    #[test]
    fn test_generic_failure_keeps_host_description() {
        struct DescribedFailure;
        impl Frame for DescribedFailure {
            fn guess_language(&self) -> Language {
                Language::C
            }
            fn evaluate_expression(&self, _: &str, _: &ExpressionOptions) -> spo_host::ValueObject {
                spo_host::ValueObject {
                    description: "<error: no such member>".to_string(),
                    error: spo_host::ErrorState::Failure("error: no member".to_string()),
                }
            }
            fn get_value_for_variable_path(&self, _: &str) -> spo_host::ValueObject {
                spo_host::ValueObject::default()
            }
        }

        assert_eq!(
            evaluate_generic(&DescribedFailure, "a.b"),
            EvaluationOutcome::Described("<error: no such member>".to_string())
        );
    }
}
