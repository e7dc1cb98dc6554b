// パス: src/geometry.rs
// 役割: Pure right-triangle formulas over validated operands
// 意図: Keep the math side-effect free and individually testable
// 関連ファイル: src/errors.rs, src/measure.rs, src/repl/cmd.rs
//! 幾何エンジン。
//!
//! 検証済みの正の実数を受け取る純粋関数群。検証は呼び出し側
//! （`src/measure.rs`）の責務とし、ここでは公式固有の前提のみ守る。

use crate::errors::{CalcError, CalcResult};

/// 直交する 2 成分から合成ベクトルの大きさ（= 斜辺）を求める。
pub fn resultant(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// 斜辺と辺 B から辺 A を求める。`b >= h` は退化三角形として拒否する。
pub fn side_a(hypotenuse: f64, side_b: f64) -> CalcResult<f64> {
    missing_leg(hypotenuse, side_b, "辺 B")
}

/// 斜辺と辺 A から辺 B を求める。`a >= h` は退化三角形として拒否する。
pub fn side_b(hypotenuse: f64, side_a: f64) -> CalcResult<f64> {
    missing_leg(hypotenuse, side_a, "辺 A")
}

// 等号も拒否する。ちょうど等しい場合は第三辺が長さゼロになるため。
fn missing_leg(hypotenuse: f64, known: f64, known_label: &str) -> CalcResult<f64> {
    if known >= hypotenuse {
        return Err(CalcError::invalid_geometry(
            "GEO001",
            format!("{known_label} は斜辺より小さくなければなりません"),
        ));
    }
    Ok((hypotenuse * hypotenuse - known * known).sqrt())
}

/// 対辺と隣辺から角度（度）を求める。隣辺ゼロは `GEO002`。
///
/// 対話側では検証がゼロを弾くため実際には到達しないが、エンジンは
/// 公開 API として自身の前提を守る。
pub fn angle_deg(opposite: f64, adjacent: f64) -> CalcResult<f64> {
    if adjacent == 0.0 {
        return Err(CalcError::division_by_zero("GEO002"));
    }
    Ok((opposite / adjacent).atan().to_degrees())
}

/// 直角三角形の周長。斜辺は [`resultant`] で補う。
pub fn perimeter(side_a: f64, side_b: f64) -> f64 {
    side_a + side_b + resultant(side_a, side_b)
}

/// 直角三角形の面積。
pub fn area(side_a: f64, side_b: f64) -> f64 {
    0.5 * side_a * side_b
}
