//! 式の分類

use crate::Result;
use regex::Regex;

/// 式の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionClass {
    /// オブジェクトのアドレス: `0x76543210`
    AddressLiteral,
    /// 単純な変数パス: `self.model.name`
    SimpleVariablePath,
    /// それ以外の式（呼び出し、演算子、代入など）
    GeneralExpression,
}

/// 式の分類器
pub struct ExpressionClassifier {
    /// 16進アドレスのパターン
    address_pattern: Regex,
    /// ドット区切りの識別子列のパターン
    variable_path_pattern: Regex,
}

impl ExpressionClassifier {
    /// 分類器を作成する
    pub fn new() -> Result<Self> {
        let address_pattern = Regex::new(r"^0x[0-9a-fA-F]+$")?;

        // 副作用のある構文（呼び出し、演算子、代入）を含まないものだけ
        // 例: count, self.items, tuple.0
        let variable_path_pattern = Regex::new(r"^\w+(?:\.\w+)*$")?;

        Ok(Self {
            address_pattern,
            variable_path_pattern,
        })
    }

    pub fn is_address_literal(&self, expression: &str) -> bool {
        self.address_pattern.is_match(expression)
    }

    pub fn is_simple_variable_path(&self, expression: &str) -> bool {
        self.variable_path_pattern.is_match(expression)
    }

    /// 式を分類する
    ///
    /// アドレスの判定が先に行われ、`0x1f` のように変数パスにもマッチする式は
    /// アドレスとして扱います。
    pub fn classify(&self, expression: &str) -> ExpressionClass {
        if self.is_address_literal(expression) {
            ExpressionClass::AddressLiteral
        } else if self.is_simple_variable_path(expression) {
            ExpressionClass::SimpleVariablePath
        } else {
            ExpressionClass::GeneralExpression
        }
    }
}
