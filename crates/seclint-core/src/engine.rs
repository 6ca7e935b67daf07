//! 单文件扫描引擎
use std::fs;
use std::path::Path;

use crate::error::ScanError;
use crate::rules::RuleSet;
use crate::types::Finding;

/// 按 UTF-8 文本方式扫描单个文件，对全文独立应用每条规则
/// - 各规则互不排斥，单文件可产生 0 到规则数条检出
/// - 首次命中语义：每条规则最多一条检出，不统计重复出现
/// - 读取失败（IO/编码）作为 `Err` 返回，由调用方决定跳过
pub(crate) fn scan_file(path: &Path, rules: &RuleSet) -> Result<Vec<Finding>, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut findings = Vec::new();
    for (re, rule) in &rules.compiled {
        if re.is_match(&content) {
            findings.push(Finding {
                file: path.to_path_buf(),
                rule: rule.label,
                severity: rule.severity,
                message: rule.message,
            });
        }
    }

    Ok(findings)
}
