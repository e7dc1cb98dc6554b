//! エラー型の定義（共通フォーマット: \[CODE\] メッセージ）。

use thiserror::Error;

/// 計算機全体で発生しうるエラー種別。
///
/// 各バリアントは安定したコードを保持し、表示は `[CODE] メッセージ` 形式に
/// 統一する。検証エラーはどのフィールドで起きたかを含める。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 解析不能・非有限・負・ゼロの入力値。
    #[error("[{code}] {field} の入力が不正です: {reason}")]
    InvalidInput {
        code: &'static str,
        field: String,
        reason: String,
    },
    /// 引き算系の公式で辺が斜辺以上になっている。
    #[error("[{code}] {message}")]
    InvalidGeometry {
        code: &'static str,
        message: String,
    },
    /// 角度計算で隣辺がゼロ。
    #[error("[{code}] 隣辺がゼロのため角度を計算できません")]
    DivisionByZero { code: &'static str },
}

impl CalcError {
    pub fn invalid_input(
        code: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            code,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_geometry(code: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            code,
            message: message.into(),
        }
    }

    pub fn division_by_zero(code: &'static str) -> Self {
        Self::DivisionByZero { code }
    }

    /// バリアントが保持する安定コードを返す。
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { code, .. } => code,
            Self::InvalidGeometry { code, .. } => code,
            Self::DivisionByZero { code } => code,
        }
    }
}

/// 計算機の結果を表す型。
pub type CalcResult<T> = Result<T, CalcError>;
