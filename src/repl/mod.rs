// パス: src/repl/mod.rs
// 役割: REPL module facade and re-exports
// 意図: Expose interactive entry points without leaking internals
// 関連ファイル: src/repl/cmd.rs, src/repl/printer.rs, src/bin/pythag.rs
//! 計算機の対話環境を構成するモジュール群をまとめたファサード。
//!
//! 入力・検証・計算・表示を役割ごとに分け、外部には最小限の API のみを公開する。
//! - `cmd`: メインループとメニュー選択の解釈
//! - `printer`: ユーザー向けの表示ロジック

pub mod cmd;
mod printer;

pub use cmd::run_repl;
