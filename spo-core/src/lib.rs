//! spo コア機能
//!
//! このクレートは、デバッガの `po` コマンドを言語に応じて置き換える `spo` の
//! 判定ロジックを提供します。式を分類し、副作用の少ない評価戦略を順に試して、
//! 最も有用な説明文を出力します。

pub mod classify;
pub mod command;
pub mod config;
pub mod emit;
pub mod errors;
pub mod gate;
pub mod po;
pub mod strategy;

pub use classify::{ExpressionClass, ExpressionClassifier};
pub use command::{Command, CommandHandler, CommandTable, InvocationContext};
pub use config::PoConfig;
pub use po::{register_po_commands, PoCommand};
pub use strategy::EvaluationOutcome;

// 他のクレートから使用するために再エクスポート
pub use spo_host::{Frame, Language};

/// spo コアの結果型
pub type Result<T> = anyhow::Result<T>;
