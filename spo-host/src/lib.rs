//! spo ホストデバッガ抽象
//!
//! このクレートは、`spo` コマンドが呼び出すホストデバッガの機能を抽象化します。
//! フレームのソース言語判定、式評価、変数パス解決をトレイトとして定義し、
//! デモやテストで使うテーブル駆動のフレーム実装も提供します。

pub mod fixture;
pub mod frame;
pub mod language;
pub mod options;
pub mod parse;
pub mod value;

pub use fixture::{parse_binding, BindingError, EvaluationRecord, FixtureFrame};
pub use frame::Frame;
pub use language::{Language, ParseLanguageError};
pub use options::ExpressionOptions;
pub use value::{ErrorState, ValueObject};

/// ホスト抽象の結果型
pub type Result<T> = anyhow::Result<T>;
