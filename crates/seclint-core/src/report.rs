//! 结果报告渲染
use std::io::{self, Write};

use crate::types::{Finding, Severity};

const BANNER_WIDTH: usize = 60;

/// 将扫描结果打印到 `out`
/// - 无检出：横幅后只打印成功行
/// - 有检出：总数、分级计数，然后按发现顺序逐条列出（编号从 1 起）
pub fn report(out: &mut dyn Write, findings: &[Finding]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "📊 security scan results")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

    if findings.is_empty() {
        writeln!(out, "✅ no security issues detected")?;
        return Ok(());
    }

    let high = findings
        .iter()
        .filter(|f| f.severity == Severity::High)
        .count();
    let medium = findings.len() - high;

    writeln!(out)?;
    writeln!(out, "🚨 issues detected: {}", findings.len())?;
    writeln!(out, "   High: {high}")?;
    writeln!(out, "   Medium: {medium}")?;
    writeln!(out)?;

    for (idx, finding) in findings.iter().enumerate() {
        writeln!(
            out,
            "{}. {} [{}] {}",
            idx + 1,
            finding.severity.icon(),
            finding.severity,
            finding.rule
        )?;
        writeln!(out, "   file: {}", finding.file.display())?;
        writeln!(out, "   detail: {}", finding.message)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn finding(file: &str, rule: &'static str, severity: Severity) -> Finding {
        Finding {
            file: PathBuf::from(file),
            rule,
            severity,
            message: "msg",
        }
    }

    fn render(findings: &[Finding]) -> String {
        let mut buf = Vec::new();
        report(&mut buf, findings).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_findings_prints_success_line() {
        let text = render(&[]);
        assert!(text.contains("✅ no security issues detected"));
        assert!(!text.contains("issues detected:"));
    }

    #[test]
    fn findings_are_listed_in_order_with_counts() {
        let findings = vec![
            finding("a.ts", "SQL injection", Severity::High),
            finding("b.js", "secret in logs", Severity::Medium),
        ];
        let text = render(&findings);
        assert!(text.contains("🚨 issues detected: 2"));
        assert!(text.contains("High: 1"));
        assert!(text.contains("Medium: 1"));
        assert!(text.contains("1. 🔴 [High] SQL injection"));
        assert!(text.contains("2. 🟡 [Medium] secret in logs"));
        assert!(text.contains("file: a.ts"));
        // 条目顺序与发现顺序一致
        assert!(text.find("a.ts").unwrap() < text.find("b.js").unwrap());
    }
}
