// パス: src/measure.rs
// 役割: Raw text validation into positive finite measurements
// 意図: Keep every numeric operand checked before it reaches the engine
// 関連ファイル: src/errors.rs, src/geometry.rs, src/repl/cmd.rs
//! 入力検証モジュール。
//!
//! 生のテキストを正の有限な実数値へ変換する。失敗はすべて `InvalidInput`
//! として報告し、どのフィールドで起きたかをメッセージに含める。

use crate::errors::{CalcError, CalcResult};

/// 検証済みの正の測定値。ラベルはエラー表示と履歴記述にのみ使う。
///
/// 生成は [`validate`] 経由のみ。値が `> 0` かつ有限であることを型として
/// 保証するため、フィールドは非公開にする。
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    value: f64,
    label: String,
}

impl Measurement {
    /// 検証済みの数値を返す。
    pub fn value(&self) -> f64 {
        self.value
    }

    /// フィールドラベルを返す。
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// 生のテキストを検証し、`Measurement` へ変換する。
///
/// 失敗条件:
/// - 実数として解析できない（`VAL001`）
/// - 有限でない（`inf` / `NaN` は f64 として解析できてしまうため明示的に拒否、`VAL001`）
/// - 負（`VAL002`）
/// - ゼロ（`VAL003`）
///
/// ゼロは Resultant や Area では数学的に扱えるが、退化三角形を弾くため
/// 一律に拒否する。
///
/// # Examples
/// ```
/// let m = pythag::validate("5", "辺 A").unwrap();
/// assert_eq!(m.value(), 5.0);
/// assert!(pythag::validate("0", "辺 A").is_err());
/// ```
pub fn validate(raw: &str, field: &str) -> CalcResult<Measurement> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        CalcError::invalid_input("VAL001", field, format!("実数として解析できません: {trimmed:?}"))
    })?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            "VAL001",
            field,
            "有限の実数ではありません",
        ));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input("VAL002", field, "負にできません"));
    }
    if value == 0.0 {
        return Err(CalcError::invalid_input("VAL003", field, "ゼロにできません"));
    }
    Ok(Measurement {
        value,
        label: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::errors::CalcError;

    #[test]
    /// 正常値が前後の空白込みでも受理されることを確認する。
    fn validate_accepts_positive_values() {
        assert_eq!(validate("5", "x").unwrap().value(), 5.0);
        assert_eq!(validate("  3.25 ", "x").unwrap().value(), 3.25);
        assert_eq!(validate("1e-3", "x").unwrap().value(), 0.001);
    }

    #[test]
    /// 負とゼロがコード付きで拒否されることを確認する。
    fn validate_rejects_negative_and_zero() {
        let err = validate("-3", "x").unwrap_err();
        assert_eq!(err.code(), "VAL002");
        assert!(matches!(err, CalcError::InvalidInput { .. }));

        let err = validate("0", "x").unwrap_err();
        assert_eq!(err.code(), "VAL003");
        // -0.0 もゼロ扱い（`-0.0 < 0.0` は偽なのでゼロ分岐で拒否される）。
        assert_eq!(validate("-0.0", "x").unwrap_err().code(), "VAL003");
    }

    #[test]
    /// 解析不能なテキストと非有限値が `VAL001` になることを確認する。
    fn validate_rejects_garbage_and_non_finite() {
        assert_eq!(validate("abc", "x").unwrap_err().code(), "VAL001");
        assert_eq!(validate("", "x").unwrap_err().code(), "VAL001");
        assert_eq!(validate("1,5", "x").unwrap_err().code(), "VAL001");
        assert_eq!(validate("inf", "x").unwrap_err().code(), "VAL001");
        assert_eq!(validate("NaN", "x").unwrap_err().code(), "VAL001");
    }

    #[test]
    /// エラーメッセージにフィールド名が含まれることを確認する。
    fn validate_error_mentions_field_label() {
        let msg = validate("abc", "斜辺").unwrap_err().to_string();
        assert!(msg.contains("斜辺"));
        assert!(msg.starts_with("[VAL001]"));
    }
}
