//! デバッガコマンド

use spo_host::Frame;
use std::collections::BTreeMap;
use std::io::Write;

/// コマンド1回分の呼び出し情報
pub struct InvocationContext<'a> {
    /// 評価する式（呼び出し側が渡した文字列そのまま）
    pub expression: &'a str,
    /// 現在の実行フレーム
    pub frame: &'a dyn Frame,
    /// 出力先
    pub output: &'a mut dyn Write,
}

impl<'a> InvocationContext<'a> {
    pub fn new(expression: &'a str, frame: &'a dyn Frame, output: &'a mut dyn Write) -> Self {
        Self {
            expression,
            frame,
            output,
        }
    }
}

/// 名前付きコマンドのハンドラ
pub type CommandHandler = Box<dyn Fn(&mut InvocationContext<'_>)>;

/// コマンドテーブル
///
/// 起動時にハンドラを名前で登録し、REPLから名前で呼び出します。
#[derive(Default)]
pub struct CommandTable {
    handlers: BTreeMap<String, CommandHandler>,
}

impl CommandTable {
    /// 空のコマンドテーブルを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// ハンドラを登録する（同名のハンドラは置き換える）
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&mut InvocationContext<'_>) + 'static,
    {
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    /// 名前でハンドラを呼び出す
    ///
    /// 未登録の名前ならfalseを返す
    pub fn dispatch(&self, name: &str, ctx: &mut InvocationContext<'_>) -> bool {
        match self.handlers.get(name) {
            Some(handler) => {
                handler(ctx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// 登録済みのコマンド名を取得する
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

/// REPLコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 戦略チェーンで式を表示
    Spo(String),
    /// 通常の `po`（1回だけ評価）
    Po(String),
    /// フレームの言語を変更
    Language(String),
    /// 変数を定義（`path = description`）
    Var(String),
    /// オブジェクトを定義（`address = description`）
    Object(String),
    /// フレームの状態を表示
    Frame,
    /// ヘルプ表示
    Help,
    /// 終了
    Quit,
}

impl Command {
    /// コマンド文字列をパースする
    ///
    /// 引数は最初の空白以降をそのまま使います（式の中の空白は保持されます）。
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        let with_argument = |make: fn(String) -> Command| {
            if rest.is_empty() {
                None
            } else {
                Some(make(rest.to_string()))
            }
        };

        match word {
            "spo" => with_argument(Command::Spo),
            "po" => with_argument(Command::Po),
            "language" | "lang" => with_argument(Command::Language),
            "var" | "v" => with_argument(Command::Var),
            "object" | "obj" => with_argument(Command::Object),
            "frame" | "f" => Some(Command::Frame),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}
