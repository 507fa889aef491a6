//! ソース言語タグ

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// フレームが報告するソース言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// 判定不能
    #[default]
    Unknown,
    C,
    Cpp,
    ObjC,
    ObjCpp,
    Swift,
    Rust,
}

/// 言語名のパースエラー
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown language '{0}'")]
pub struct ParseLanguageError(pub String);

impl Language {
    /// 正規の言語名を取得する
    pub fn name(&self) -> &'static str {
        match self {
            Language::Unknown => "unknown",
            Language::C => "c",
            Language::Cpp => "c++",
            Language::ObjC => "objective-c",
            Language::ObjCpp => "objective-c++",
            Language::Swift => "swift",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(Language::Unknown),
            "c" => Ok(Language::C),
            "c++" | "cpp" | "cplusplus" => Ok(Language::Cpp),
            "objc" | "objective-c" => Ok(Language::ObjC),
            "objc++" | "objective-c++" => Ok(Language::ObjCpp),
            "swift" => Ok(Language::Swift),
            "rust" => Ok(Language::Rust),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("swift".parse::<Language>(), Ok(Language::Swift));
        assert_eq!("Swift".parse::<Language>(), Ok(Language::Swift));
        assert_eq!("objc".parse::<Language>(), Ok(Language::ObjC));
        assert_eq!("objective-c".parse::<Language>(), Ok(Language::ObjC));
        assert_eq!("cpp".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!("objc++".parse::<Language>(), Ok(Language::ObjCpp));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "cobol".parse::<Language>(),
            Err(ParseLanguageError("cobol".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_name() {
        for lang in [Language::C, Language::Cpp, Language::ObjC, Language::Swift] {
            assert_eq!(lang.to_string().parse::<Language>(), Ok(lang));
        }
    }
}
