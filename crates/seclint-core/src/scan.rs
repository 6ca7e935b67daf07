//! 扫描主流程：目录遍历与检出收集
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::engine::scan_file;
use crate::error::ScanError;
use crate::rules::RuleSet;
use crate::types::{Finding, ScanStats, Severity};

/// 仅扫描脚本类源文件
const SCAN_EXTENSIONS: &[&str] = &["ts", "js"];

/// 目录扫描器：持有根路径与按发现顺序收集的检出序列
///
/// 一次调用对应一个实例，无进程级全局状态；检出只追加，不删除不重排。
pub struct Scanner {
    root: PathBuf,
    rules: RuleSet,
    findings: Vec<Finding>,
}

impl Scanner {
    /// 创建扫描器并编译内置规则集
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        Ok(Self {
            root: root.into(),
            rules: RuleSet::builtin()?,
            findings: Vec::new(),
        })
    }

    /// 按发现顺序返回全部检出
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// 递归枚举根目录下的 .ts/.js 文件并逐个扫描
    ///
    /// 稳定性：先收集候选文件再按路径排序，保证输出顺序可复现。
    /// 单文件失败（读取/编码/遍历条目）只告警跳过，永不中断整次扫描。
    pub fn scan(&mut self) -> ScanStats {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!("⚠️  {}", ScanError::from(err));
                    continue;
                }
            };
            if entry.file_type().is_file() && has_scan_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();

        let mut stats = ScanStats::default();
        for path in files {
            match scan_file(&path, &self.rules) {
                Ok(found) => {
                    stats.files_scanned += 1;
                    for finding in found {
                        match finding.severity {
                            Severity::High => stats.high += 1,
                            Severity::Medium => stats.medium += 1,
                        }
                        stats.findings_total += 1;
                        self.findings.push(finding);
                    }
                }
                Err(err) => warn!("⚠️  {err}"),
            }
        }
        stats
    }
}

fn has_scan_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SCAN_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
