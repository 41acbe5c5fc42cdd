use std::fmt;
use thiserror::Error;

/// registry 解決の段階
///
/// 解決に失敗したとき、どの段階で失敗したかをエラーに含める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    /// CLI 同梱の registry（実行バイナリ位置から探索）
    Builtin,
    /// ファイルパスとしての解決
    Path,
    /// パッケージ名としての解決（node_modules 探索）
    Package,
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionTier::Builtin => "builtin",
            ResolutionTier::Path => "path",
            ResolutionTier::Package => "package",
        };
        write!(f, "{}", name)
    }
}

/// CLI統一エラー型
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to resolve registry `{registry}` (tier: {tier})")]
    Resolution {
        tier: ResolutionTier,
        registry: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Package manager `{pm}` exited with status {status}")]
    Subprocess { pm: String, status: String },

    #[error("Cancelled")]
    Cancelled,

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
