use std::path::PathBuf;

use thiserror::Error;

pub type AntResult<T> = Result<T, AntError>;

#[derive(Debug, Error)]
pub enum AntError {
    #[error("無法讀取檔案 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("無法解析設定檔: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// 設定值超出合法範圍
    #[error("設定值 `{field}` 不合法: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("題目檔缺少 DIMENSION 欄位")]
    MissingDimension,

    #[error("DIMENSION 欄位無法解析: `{0}`")]
    InvalidDimension(String),

    #[error("第 {line} 行的座標無法解析: `{text}`")]
    InvalidCoordinate { line: usize, text: String },

    #[error("DIMENSION 宣告了 {expected} 個城市，但只讀到 {found} 個座標")]
    CoordinateCount { expected: usize, found: usize },

    #[error("沒有任何城市")]
    NoCities,

    #[error("無法輸出報告: {0}")]
    Report(#[source] serde_json::Error),
}

impl AntError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        AntError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
