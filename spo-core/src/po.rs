//! spo コマンド本体
//!
//! 言語判定、式の分類、戦略チェーン、結果出力をつなぎます。
//! 状態を持たないので、同じフレームに同じ式を渡せば同じ結果になります。

use crate::classify::{ExpressionClass, ExpressionClassifier};
use crate::command::{CommandTable, InvocationContext};
use crate::emit::emit;
use crate::strategy::{evaluate_address, print_fallback, resolve_variable_path};
use crate::{gate, EvaluationOutcome, PoConfig, Result};
use spo_host::Frame;
use tracing::debug;

/// `spo` のヘルプ文
pub const SPO_HELP: &str = "\
Swift `po` substitute. Works around known issues with po. This po does the following:
    1. handles object addresses (ex: 0x76543210)
    2. prefers `frame variable` for speed and avoiding unintentional strong references
    3. calls Swift's print() function, also to avoid unintentional strong references";

/// `po` のヘルプ文
pub const PO_HELP: &str = "Evaluate an expression once and print its description.";

/// spo コマンド
pub struct PoCommand {
    classifier: ExpressionClassifier,
    config: PoConfig,
}

impl PoCommand {
    /// コマンドを作成する
    pub fn new(config: PoConfig) -> Result<Self> {
        Ok(Self {
            classifier: ExpressionClassifier::new()?,
            config,
        })
    }

    /// 式の説明文を決める
    ///
    /// 言語が対象外なら通常の評価を1回だけ行い、対象ならアドレス、変数パス、
    /// print の順に試します。
    pub fn evaluate(&self, frame: &dyn Frame, expression: &str) -> EvaluationOutcome {
        if !gate::requires_po_chain(frame, &self.config) {
            return gate::evaluate_generic(frame, expression);
        }

        let class = self.classifier.classify(expression);
        debug!("classified '{}' as {:?}", expression, class);

        if class == ExpressionClass::AddressLiteral {
            return evaluate_address(frame, expression, &self.config);
        }

        let try_variable_path =
            class == ExpressionClass::SimpleVariablePath || !self.config.variable_path_guard;
        if try_variable_path {
            let outcome = resolve_variable_path(frame, expression);
            if outcome != EvaluationOutcome::Invalid {
                return outcome;
            }
            debug!("falling back to print() for '{}'", expression);
        }

        print_fallback(frame, expression, &self.config)
    }

    /// コマンドを実行して結果を出力する
    pub fn execute(&self, ctx: &mut InvocationContext<'_>) {
        let outcome = self.evaluate(ctx.frame, ctx.expression);
        emit(ctx.output, &outcome);
    }
}

/// `spo` と `po` をコマンドテーブルに登録する
pub fn register_po_commands(table: &mut CommandTable, config: PoConfig) -> Result<()> {
    let command = PoCommand::new(config)?;
    table.register("spo", move |ctx| command.execute(ctx));
    table.register("po", |ctx| {
        let outcome = gate::evaluate_generic(ctx.frame, ctx.expression);
        emit(ctx.output, &outcome);
    });

    Ok(())
}
