// パス: src/repl/printer.rs
// 役割: Helpers for rendering the menu, results, and history
// 意図: Keep interactive messaging consistent across operations
// 関連ファイル: src/repl/cmd.rs, src/history.rs
//! メニュー・結果・履歴の表示を集約したモジュール。
//! 表示形式を一箇所にまとめ、対話時の出力を統一する。

use crate::history::Ledger;
use std::io::{self, Write};

const MENU_TEXT: &str = concat!(
    "\n==================================================\n",
    "ピタゴラス定理計算機\n",
    "==================================================\n",
    "1. 合成ベクトルを求める（2 辺から）\n",
    "2. 辺 A を求める（斜辺と辺 B から）\n",
    "3. 辺 B を求める（斜辺と辺 A から）\n",
    "4. 角度を計算（度）\n",
    "5. 周長を計算\n",
    "6. 面積を計算\n",
    "7. 履歴を表示\n",
    "8. 終了\n",
    "--------------------------------------------------\n",
);

/// メニューを任意のライターへ描画する。
pub(crate) fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(MENU_TEXT.as_bytes())
}

/// 結果表示のスタイル。桁数と補足行の有無が操作ごとに異なる。
#[derive(Clone, Copy, Debug)]
pub(crate) enum ResultStyle {
    /// 長さ系: 小数第 4 位まで。
    Length,
    /// 角度: 小数第 2 位まで + 度記号。
    Angle,
    /// 面積: 小数第 4 位まで + 単位表記。
    Area,
    /// 周長: 小数第 4 位まで + 辺の内訳行。
    Perimeter,
}

/// 計算結果を表示用の行へ整形する。`a`/`b` は内訳表示にのみ使う。
pub(crate) fn result_lines(
    style: ResultStyle,
    caption: &str,
    a: f64,
    b: f64,
    value: f64,
) -> Vec<String> {
    match style {
        ResultStyle::Length => vec![format!("✓ {caption}: {value:.4}")],
        ResultStyle::Angle => vec![format!("✓ {caption}: {value:.2}°")],
        ResultStyle::Area => vec![format!("✓ {caption}: {value:.4} 平方単位")],
        ResultStyle::Perimeter => {
            let hyp = value - a - b;
            vec![
                format!("✓ {caption}: {value:.4}"),
                format!("  (内訳: {a:.4} + {b:.4} + {hyp:.4})"),
            ]
        }
    }
}

/// 履歴台帳を表示用の行へ整形する。空なら案内行のみ返す。
pub(crate) fn history_lines(ledger: &Ledger) -> Vec<String> {
    if ledger.is_empty() {
        return vec!["履歴はまだありません。".to_string()];
    }
    let mut lines = vec![
        "==================================================".to_string(),
        "計算履歴".to_string(),
        "==================================================".to_string(),
    ];
    for (index, entry) in ledger.list().iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, entry.operation));
        lines.push(format!("   入力: {}", entry.inputs));
        lines.push(format!("   結果: {:.4}", entry.result));
    }
    lines
}
