// パス: src/lib.rs
// 役割: Crate root wiring modules and exports
// 意図: Expose minimal API surface for calculator components
// 関連ファイル: src/geometry.rs, src/measure.rs, src/errors.rs
//! Pythag (Rust) ルートモジュール
//!
//! 目的:
//! - 直角三角形と直交ベクトル対のためのピタゴラス定理計算機を提供する。
//! - 実装は読みやすさと変更容易性を最優先。
//!
//! 方針:
//! - コメント/ドキュメントは日本語、識別子は英語。
//! - 検証・計算・履歴・対話ループを役割ごとにモジュール分割する。
//! - パブリックAPIは最小限。

pub mod errors;
pub mod geometry;
pub mod history;
pub mod measure;
pub mod repl;

// 便利な再エクスポート（必要最小限: 利用側からエラー/検証のみ直接参照可）
pub use crate::errors::*;
pub use crate::measure::{validate, Measurement};
