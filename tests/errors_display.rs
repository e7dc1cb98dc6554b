// パス: tests/errors_display.rs
// 役割: Unit tests for CalcError display formatting paths
// 意図: Prevent regressions in diagnostic string rendering
// 関連ファイル: src/errors.rs, src/measure.rs, src/geometry.rs
// エラー表示（Display）の分岐網羅テスト
use pythag::errors::CalcError;

#[test]
fn invalid_input_display_includes_code_field_reason() {
    let e = CalcError::invalid_input("VAL002", "辺 A", "負にできません");
    assert_eq!(e.to_string(), "[VAL002] 辺 A の入力が不正です: 負にできません");
    assert_eq!(e.code(), "VAL002");
}

#[test]
fn invalid_geometry_display() {
    let e = CalcError::invalid_geometry("GEO001", "辺 B は斜辺より小さくなければなりません");
    assert_eq!(
        e.to_string(),
        "[GEO001] 辺 B は斜辺より小さくなければなりません"
    );
}

#[test]
fn division_by_zero_display() {
    let e = CalcError::division_by_zero("GEO002");
    assert_eq!(e.to_string(), "[GEO002] 隣辺がゼロのため角度を計算できません");
}

#[test]
fn errors_are_comparable_for_tests() {
    let a = CalcError::division_by_zero("GEO002");
    let b = CalcError::division_by_zero("GEO002");
    assert_eq!(a, b);
}
