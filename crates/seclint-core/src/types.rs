//! 公共类型（对外暴露）
use std::fmt;
use std::path::PathBuf;

/// 严重级别：High 阻断流水线（退出码 1），Medium 仅报告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    /// 报告条目前的图标
    pub(crate) fn icon(self) -> &'static str {
        match self {
            Severity::High => "🔴",
            Severity::Medium => "🟡",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => f.write_str("High"),
            Severity::Medium => f.write_str("Medium"),
        }
    }
}

/// 单条检出项：文件、规则标签、严重级别与风险说明
/// 追加到结果序列后不再修改，顺序即发现顺序
#[derive(Debug, Clone)]
pub struct Finding {
    pub file: PathBuf,
    pub rule: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

/// 扫描统计信息（便于 CLI 打印与退出码判定）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub findings_total: usize,
    pub high: usize,
    pub medium: usize,
}
