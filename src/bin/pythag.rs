// パス: src/bin/pythag.rs
// 役割: Binary entrypoint that launches the interactive calculator
// 意図: Offer a CLI executable for menu-driven triangle computations
// 関連ファイル: src/repl/mod.rs, src/lib.rs, src/repl/cmd.rs
use clap::Parser;

/// 対話式ピタゴラス定理計算機。操作フラグは持たず、すべてメニューで選択する。
#[derive(Parser)]
#[command(name = "pythag-calc", version, about = "直角三角形と直交ベクトル対のための対話式計算機")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    pythag::repl::run_repl();
}
