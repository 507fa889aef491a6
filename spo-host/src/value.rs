//! 評価結果の値

/// ホストが報告するエラー状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorState {
    #[default]
    Success,
    /// 失敗（診断メッセージ付き）
    Failure(String),
}

impl ErrorState {
    pub fn is_success(&self) -> bool {
        matches!(self, ErrorState::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// 診断メッセージを取得する（成功時は空文字列）
    pub fn description(&self) -> &str {
        match self {
            ErrorState::Success => "",
            ErrorState::Failure(text) => text.as_str(),
        }
    }
}

/// 式評価または変数パス解決の結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueObject {
    /// 値の説明文（ホストのフォーマッタが生成したもの）
    pub description: String,
    /// エラー状態
    pub error: ErrorState,
}

impl ValueObject {
    /// 成功した値を作成する
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            error: ErrorState::Success,
        }
    }

    /// 失敗した値を作成する
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            error: ErrorState::Failure(diagnostic.into()),
        }
    }

    /// 値が有効かどうか
    pub fn is_valid(&self) -> bool {
        self.error.is_success()
    }
}
