//! エラーメッセージ定数

/// ホストが説明文の中で評価エラーを報告するときの接頭辞
pub const DESCRIPTION_ERROR_PREFIX: &str = "expression produced error:";

/// 説明文がホストの評価エラー報告かどうかを判定する
///
/// ホストとの文字列ベースの取り決めなので、判定はこの関数だけで行います。
pub fn is_description_error(description: &str) -> bool {
    description.starts_with(DESCRIPTION_ERROR_PREFIX)
}
