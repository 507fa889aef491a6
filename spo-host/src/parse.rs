//! 数値リテラルとアドレスのパース

use anyhow::Result;

/// `0x` / `0X` 付きの16進数、または10進数のリテラル
///
/// 前後の空白は許しません。式としてそのまま評価できる形だけを受け付けます。
pub fn parse_literal(s: &str) -> Option<u64> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => s.parse::<u64>().ok(),
    }
}

/// ユーザー入力のアドレスをパースする
///
/// 前後の空白を取り除いてリテラルとして読み、それも失敗したら
/// プレフィックスなしの16進数（`7fff0000` など）として読みます。
///
/// ```
/// use spo_host::parse::parse_address;
///
/// assert_eq!(parse_address(" 0x10 ").unwrap(), 16);
/// assert_eq!(parse_address("ff").unwrap(), 255);
/// ```
pub fn parse_address(s: &str) -> Result<u64> {
    let s = s.trim();
    parse_literal(s)
        .or_else(|| u64::from_str_radix(s, 16).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid address '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_forms() {
        assert_eq!(parse_literal("0x76543210"), Some(0x7654_3210));
        assert_eq!(parse_literal("0XfF"), Some(0xff));
        assert_eq!(parse_literal("42"), Some(42));
    }

    #[test]
    fn test_literal_is_strict() {
        // 変数名に見えるものは数値にしない
        assert_eq!(parse_literal("abc"), None);
        assert_eq!(parse_literal(" 1"), None);
        assert_eq!(parse_literal("0x"), None);
        assert_eq!(parse_literal("1 + 1"), None);
    }

    #[test]
    fn test_address_accepts_bare_hex() {
        assert_eq!(parse_address("deadbeef").unwrap(), 0xdead_beef);
        assert_eq!(parse_address("10").unwrap(), 10);
        assert_eq!(parse_address("\t0x20\n").unwrap(), 0x20);
    }

    #[test]
    fn test_address_rejects_garbage() {
        let err = parse_address("0xnope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid address '0xnope'");
        assert!(parse_address("").is_err());
    }
}
