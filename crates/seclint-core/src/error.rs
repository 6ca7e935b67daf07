//! 核心错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的错误分类
///
/// `Read` 与 `Walk` 由外层循环捕获后告警跳过，永不终止整次扫描；
/// `Pattern` 在构建规则集时出现，直接向上抛出。
#[derive(Debug, Error)]
pub enum ScanError {
    /// 单文件读取失败（IO 错误或非 UTF-8 内容）
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 目录遍历中的单个条目错误
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// 内置规则正则编译失败
    #[error("invalid rule pattern `{id}`: {source}")]
    Pattern {
        id: &'static str,
        #[source]
        source: regex::Error,
    },
}
