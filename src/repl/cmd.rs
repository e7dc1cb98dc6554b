// パス: src/repl/cmd.rs
// 役割: Menu loop, selection parsing, and computation orchestration
// 意図: Drive interactive usage by coordinating validation, math, and history
// 関連ファイル: src/measure.rs, src/geometry.rs, src/history.rs, src/repl/printer.rs
//! メニュー駆動の対話ループを担当するモジュール。
//! 利用者の選択を解釈し、検証・幾何エンジン・履歴台帳へ橋渡しする。

use std::collections::HashMap;
use std::io::{self, Write};

use once_cell::sync::Lazy;

use crate::errors::CalcResult;
use crate::geometry::{angle_deg, area, perimeter, resultant, side_a, side_b};
use crate::history::{HistoryEntry, Ledger};
use crate::measure::{validate, Measurement};

use super::printer::{history_lines, render_menu, result_lines, ResultStyle};

/// 対話セッションを開始し、ユーザー入力を処理し続ける。
///
/// # Examples
/// ```no_run
/// # fn main() {
/// pythag::repl::run_repl();
/// # }
/// ```
pub fn run_repl() {
    let mut source = StdinLineSource;
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    if let Err(err) = run_repl_with(&mut source, &mut stdout, &mut stderr) {
        let _ = writeln!(stderr, "対話ループの実行中にエラーが発生しました: {}", err);
    }
}

/// 行入力が返す 2 種類の結果を表す列挙体。
pub(crate) enum ReadResult {
    Line(String),
    Eof,
}

/// 対話ループに必要な最小限の行入力抽象。
pub(crate) trait ReplLineSource {
    /// プロンプトを提示し、1 行分の入力または EOF を取得する。
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult>;
}

/// 標準入力から行を読み取る標準実装。プロンプトは標準出力へ直接書く。
pub(crate) struct StdinLineSource;

impl ReplLineSource for StdinLineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        let mut out = io::stdout();
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut buf = String::new();
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(ReadResult::Eof);
        }
        Ok(ReadResult::Line(buf.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

fn run_repl_with<S, W, E>(source: &mut S, out: &mut W, err: &mut E) -> io::Result<()>
where
    S: ReplLineSource,
    W: Write,
    E: Write,
{
    writeln!(
        out,
        "ピタゴラス定理計算機 (Rust) :: 1-6 で計算 :: 7 で履歴 :: 8 で終了"
    )?;
    let mut session = ReplSession::new();

    'menu: loop {
        render_menu(out)?;
        let selection = match source.read_line("選択 (1-8): ")? {
            ReadResult::Line(line) => line.trim().to_string(),
            // 入力の終端は通常終了として扱う。
            ReadResult::Eof => {
                writeln!(out)?;
                break 'menu;
            }
        };
        if selection.is_empty() {
            continue;
        }

        match parse_menu_choice(&selection) {
            MenuChoice::Quit => {
                writeln!(out, "ご利用ありがとうございました。")?;
                break 'menu;
            }
            MenuChoice::History => dispatch_messages(session.render_history(), out, err)?,
            MenuChoice::Invalid(s) => {
                writeln!(err, "エラー: 1-8 から選択してください: {}", s)?;
            }
            MenuChoice::Compute(op) => {
                let a = match read_operand(source, op.prompts[0], op.fields[0], err)? {
                    OperandOutcome::Valid(m) => m,
                    OperandOutcome::Invalid => continue 'menu,
                    OperandOutcome::Eof => {
                        writeln!(out)?;
                        break 'menu;
                    }
                };
                let b = match read_operand(source, op.prompts[1], op.fields[1], err)? {
                    OperandOutcome::Valid(m) => m,
                    OperandOutcome::Invalid => continue 'menu,
                    OperandOutcome::Eof => {
                        writeln!(out)?;
                        break 'menu;
                    }
                };
                let msgs = session.run_operation(op, &a, &b);
                dispatch_messages(msgs, out, err)?;
            }
        }
    }

    Ok(())
}

fn dispatch_messages<W: Write, E: Write>(
    msgs: Vec<ReplMsg>,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    for msg in msgs {
        match msg {
            ReplMsg::Out(s) => writeln!(out, "{}", s)?,
            ReplMsg::Err(s) => writeln!(err, "{}", s)?,
        }
    }
    Ok(())
}

/// 1 個のオペランドの読み取り結果。検証エラーは読み取り時点で報告済み。
enum OperandOutcome {
    Valid(Measurement),
    Invalid,
    Eof,
}

// 検証は入力直後に行う。最初のオペランドが不正なら 2 つ目は促さない。
fn read_operand<S: ReplLineSource, E: Write>(
    source: &mut S,
    prompt: &str,
    field: &str,
    err: &mut E,
) -> io::Result<OperandOutcome> {
    match source.read_line(prompt)? {
        ReadResult::Eof => Ok(OperandOutcome::Eof),
        ReadResult::Line(line) => match validate(&line, field) {
            Ok(m) => Ok(OperandOutcome::Valid(m)),
            Err(e) => {
                writeln!(err, "エラー: {}", e)?;
                Ok(OperandOutcome::Invalid)
            }
        },
    }
}

/// 対話セッションがユーザーへ返す応答メッセージのカテゴリ。
pub(crate) enum ReplMsg {
    Out(String),
    Err(String),
}

/// 履歴台帳を保持するセッション管理構造体。
pub(crate) struct ReplSession {
    pub(crate) ledger: Ledger,
}

impl ReplSession {
    /// 空の履歴でセッションを構築する。
    pub(crate) fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    /// 検証済みオペランドで操作を実行し、出力メッセージを返す。
    /// 成功した計算のみ履歴へ追記する。
    pub(crate) fn run_operation(
        &mut self,
        op: &OpSpec,
        a: &Measurement,
        b: &Measurement,
    ) -> Vec<ReplMsg> {
        match (op.apply)(a.value(), b.value()) {
            Ok(value) => {
                let lines = result_lines(op.style, op.caption, a.value(), b.value(), value);
                self.ledger.append(HistoryEntry {
                    operation: op.label.to_string(),
                    inputs: (op.describe)(a.value(), b.value()),
                    result: value,
                });
                lines.into_iter().map(ReplMsg::Out).collect()
            }
            Err(e) => vec![ReplMsg::Err(format!("エラー: {}", e))],
        }
    }

    /// 履歴表示用のメッセージ列を返す。
    pub(crate) fn render_history(&self) -> Vec<ReplMsg> {
        history_lines(&self.ledger)
            .into_iter()
            .map(ReplMsg::Out)
            .collect()
    }
}

/// メニュー項目 1〜6 の操作仕様。プロンプト・検証ラベル・公式を 1 か所に束ねる。
pub(crate) struct OpSpec {
    /// メニュー上の選択キー。
    pub(crate) key: char,
    /// 履歴に記録する操作名。
    pub(crate) label: &'static str,
    /// 結果行の見出し。
    pub(crate) caption: &'static str,
    /// 結果の表示スタイル。
    pub(crate) style: ResultStyle,
    /// オペランド入力時のプロンプト。
    pub(crate) prompts: [&'static str; 2],
    /// 検証エラーに使うフィールドラベル。
    pub(crate) fields: [&'static str; 2],
    /// 履歴の入力説明を生成する。
    pub(crate) describe: fn(f64, f64) -> String,
    /// 対応する幾何エンジンの公式。
    pub(crate) apply: fn(f64, f64) -> CalcResult<f64>,
}

static OPS: [OpSpec; 6] = [
    OpSpec {
        key: '1',
        label: "合成ベクトルを求める",
        caption: "合成ベクトル",
        style: ResultStyle::Length,
        prompts: ["1 つ目のベクトル/辺の大きさ: ", "2 つ目のベクトル/辺の大きさ: "],
        fields: ["ベクトル 1", "ベクトル 2"],
        describe: |a, b| format!("({a}, {b})"),
        apply: |a, b| Ok(resultant(a, b)),
    },
    OpSpec {
        key: '2',
        label: "辺 A を求める",
        caption: "辺 A",
        style: ResultStyle::Length,
        prompts: ["斜辺: ", "辺 B: "],
        fields: ["斜辺", "辺 B"],
        describe: |h, b| format!("(h={h}, b={b})"),
        apply: side_a,
    },
    OpSpec {
        key: '3',
        label: "辺 B を求める",
        caption: "辺 B",
        style: ResultStyle::Length,
        prompts: ["斜辺: ", "辺 A: "],
        fields: ["斜辺", "辺 A"],
        describe: |h, a| format!("(h={h}, a={a})"),
        apply: side_b,
    },
    OpSpec {
        key: '4',
        label: "角度を計算",
        caption: "角度",
        style: ResultStyle::Angle,
        prompts: ["対辺: ", "隣辺: "],
        fields: ["対辺", "隣辺"],
        describe: |opp, adj| format!("(opp={opp}, adj={adj})"),
        apply: angle_deg,
    },
    OpSpec {
        key: '5',
        label: "周長を計算",
        caption: "周長",
        style: ResultStyle::Perimeter,
        prompts: ["辺 A: ", "辺 B: "],
        fields: ["辺 A", "辺 B"],
        describe: |a, b| format!("({a}, {b})"),
        apply: |a, b| Ok(perimeter(a, b)),
    },
    OpSpec {
        key: '6',
        label: "面積を計算",
        caption: "面積",
        style: ResultStyle::Area,
        prompts: ["辺 A: ", "辺 B: "],
        fields: ["辺 A", "辺 B"],
        describe: |a, b| format!("({a}, {b})"),
        apply: |a, b| Ok(area(a, b)),
    },
];

/// 選択キーから操作仕様を引くための索引。
static OPS_BY_KEY: Lazy<HashMap<char, &'static OpSpec>> =
    Lazy::new(|| OPS.iter().map(|op| (op.key, op)).collect());

/// メニューで解釈できるトップレベル選択の集合。
pub(crate) enum MenuChoice {
    /// 1〜6 の計算操作。
    Compute(&'static OpSpec),
    /// 7: 履歴を表示する。
    History,
    /// 8: セッションを終了する。
    Quit,
    /// 認識できなかった選択入力。
    Invalid(String),
}

/// 生の選択文字列を `MenuChoice` 列挙に解析する。
pub(crate) fn parse_menu_choice(input: &str) -> MenuChoice {
    let s = input.trim();
    match s {
        "7" => return MenuChoice::History,
        "8" => return MenuChoice::Quit,
        _ => {}
    }
    let mut chars = s.chars();
    if let (Some(key), None) = (chars.next(), chars.next()) {
        if let Some(op) = OPS_BY_KEY.get(&key) {
            return MenuChoice::Compute(op);
        }
    }
    MenuChoice::Invalid(s.to_string())
}
