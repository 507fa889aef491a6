//! 結果の出力

use crate::EvaluationOutcome;
use std::io::Write;
use tracing::warn;

/// 結果を1行出力する（`Invalid` の場合は何も出力しない）
///
/// 書き込みの失敗は呼び出し側の問題なので、ログに残すだけです。
pub fn emit(output: &mut dyn Write, outcome: &EvaluationOutcome) {
    let text = match outcome {
        EvaluationOutcome::Described(text) | EvaluationOutcome::Error(text) => text,
        EvaluationOutcome::Invalid => return,
    };

    if let Err(e) = writeln!(output, "{}", text) {
        warn!("failed to write command output: {}", e);
    }
}
