// パス: src/history.rs
// 役割: Append-only in-memory ledger of successful computations
// 意図: Keep past results reviewable for the lifetime of the session
// 関連ファイル: src/repl/cmd.rs, src/repl/printer.rs
//! 計算履歴モジュール。
//!
//! 成功した計算のみを追記する順序付きの台帳。削除も上限も永続化もない。

/// 1 件の計算記録。作成後は変更しない。
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 操作ラベル（例: "合成ベクトルを求める"）。
    pub operation: String,
    /// 入力の説明（例: "(h=5, b=3)"）。
    pub inputs: String,
    /// 計算結果。成功した計算の出力のみが入る。
    pub result: f64,
}

/// 追記専用の履歴台帳。挿入順を保持し、表示は 1 始まりで行う。
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: Vec<HistoryEntry>,
}

impl Ledger {
    /// 空の台帳を構築する。
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録を末尾へ追加する。常に成功する。
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// 作成順の読み取り専用ビューを返す。
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// 台帳が空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 記録件数を返す。
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
