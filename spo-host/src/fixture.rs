//! テーブル駆動のフレーム実装
//!
//! 変数パスとオブジェクトアドレスの説明文をあらかじめ登録しておき、
//! `Frame` の問い合わせにテーブル参照だけで応答します。
//! CLIのデモと、コマンドの戦略選択のテストに使います。

use crate::parse::{parse_address, parse_literal};
use crate::{ExpressionOptions, Frame, Language, Result, ValueObject};
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::trace;

/// `KEY=DESCRIPTION` 形式の定義のパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("Missing '=' in binding '{0}'")]
    MissingSeparator(String),
    #[error("Empty name in binding '{0}'")]
    EmptyName(String),
}

/// 記録された式評価
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRecord {
    pub expression: String,
    pub options: ExpressionOptions,
}

/// テーブル駆動のフレーム
#[derive(Debug, Default)]
pub struct FixtureFrame {
    language: Language,
    /// 変数パス -> 説明文
    variables: BTreeMap<String, String>,
    /// オブジェクトアドレス -> 説明文
    objects: BTreeMap<u64, String>,
    /// 評価の履歴
    evaluations: RefCell<Vec<EvaluationRecord>>,
    /// `print()` がホストの標準出力に書いた行
    console: RefCell<Vec<String>>,
}

impl FixtureFrame {
    /// 指定した言語のフレームを作成する
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// 変数を登録する（ビルダー形式）
    pub fn with_variable(mut self, path: &str, description: &str) -> Self {
        self.define_variable(path, description);
        self
    }

    /// オブジェクトを登録する（ビルダー形式）
    pub fn with_object(mut self, address: u64, description: &str) -> Self {
        self.define_object(address, description);
        self
    }

    pub fn define_variable(&mut self, path: &str, description: &str) {
        self.variables
            .insert(path.to_string(), description.to_string());
    }

    pub fn define_object(&mut self, address: u64, description: &str) {
        self.objects.insert(address, description.to_string());
    }

    /// `ADDRESS=DESCRIPTION` 形式の定義からオブジェクトを登録する
    pub fn define_object_binding(&mut self, binding: &str) -> Result<()> {
        let (address, description) = parse_binding(binding)?;
        let address = parse_address(&address)?;
        self.define_object(address, &description);
        Ok(())
    }

    /// `PATH=DESCRIPTION` 形式の定義から変数を登録する
    pub fn define_variable_binding(&mut self, binding: &str) -> Result<()> {
        let (path, description) = parse_binding(binding)?;
        self.define_variable(&path, &description);
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// 登録済みの変数を列挙する
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 登録済みのオブジェクトを列挙する
    pub fn objects(&self) -> impl Iterator<Item = (u64, &str)> {
        self.objects.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// これまでの式評価の履歴を取得する
    pub fn evaluations(&self) -> Vec<EvaluationRecord> {
        self.evaluations.borrow().clone()
    }

    /// `print()` の出力を取り出す
    pub fn take_console(&self) -> Vec<String> {
        std::mem::take(&mut *self.console.borrow_mut())
    }

    /// 変数名または数値リテラルの説明文を探す
    fn lookup(&self, expression: &str) -> Option<String> {
        if let Some(description) = self.variables.get(expression) {
            return Some(description.clone());
        }
        parse_literal(expression).map(|value| value.to_string())
    }

    fn unresolved(expression: &str) -> ValueObject {
        ValueObject::failed(format!("error: cannot find '{}' in scope", expression))
    }
}

impl Frame for FixtureFrame {
    fn guess_language(&self) -> Language {
        self.language
    }

    fn evaluate_expression(&self, expression: &str, options: &ExpressionOptions) -> ValueObject {
        trace!("fixture evaluate '{}' with {:?}", expression, options);
        self.evaluations.borrow_mut().push(EvaluationRecord {
            expression: expression.to_string(),
            options: *options,
        });

        if let Some(inner) = expression
            .strip_prefix("print(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return match self.lookup(inner) {
                Some(description) => {
                    self.console.borrow_mut().push(description);
                    ValueObject::new("")
                }
                None => Self::unresolved(inner),
            };
        }

        if options.coerce_to_id {
            if let Some(address) = parse_literal(expression) {
                // 未登録のアドレスは説明文なしで成功する
                let description = self.objects.get(&address).cloned().unwrap_or_default();
                return ValueObject::new(description);
            }
        }

        match self.lookup(expression) {
            Some(description) => ValueObject::new(description),
            None => Self::unresolved(expression),
        }
    }

    fn get_value_for_variable_path(&self, path: &str) -> ValueObject {
        match self.variables.get(path) {
            Some(description) => ValueObject::new(description.clone()),
            None => ValueObject::failed(format!(
                "no variable named '{}' found in this frame",
                path
            )),
        }
    }
}

/// `KEY=DESCRIPTION` を分割する
///
/// 最初の `=` で分割し、両辺の前後の空白を取り除きます。
pub fn parse_binding(binding: &str) -> std::result::Result<(String, String), BindingError> {
    let (key, value) = binding
        .split_once('=')
        .ok_or_else(|| BindingError::MissingSeparator(binding.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(BindingError::EmptyName(binding.to_string()));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
