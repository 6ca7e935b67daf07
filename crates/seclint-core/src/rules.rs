//! 内置规则表与编译后的规则集
use regex::Regex;

use crate::error::ScanError;
use crate::types::Severity;

/// 单条规则的声明：id、展示标签、严重级别、正则与风险说明
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) severity: Severity,
    pub(crate) pattern: &'static str,
    pub(crate) message: &'static str,
}

/// 内置规则表（规则即数据：增删规则只改这里，不改控制流）
pub(crate) const RULES: &[Rule] = &[
    Rule {
        id: "sql-injection",
        label: "SQL injection",
        severity: Severity::High,
        // 反引号模板字符串内以 SELECT 开头并出现 ${ 插值
        pattern: r"`SELECT.*\$\{",
        message: "SQL assembled in a template literal; use parameterized queries instead",
    },
    Rule {
        id: "hardcoded-secret",
        label: "hardcoded secret",
        severity: Severity::High,
        // api_?key 兼容 apiKey / api_key 两种写法
        pattern: r#"(?i)(password|secret|api_?key)\s*=\s*["'][^"']+["']"#,
        message: "credentials appear to be hardcoded in source",
    },
    Rule {
        id: "eval-usage",
        label: "eval usage",
        severity: Severity::High,
        pattern: r"eval\(",
        message: "eval() executes arbitrary code and is a security risk",
    },
    Rule {
        id: "secret-in-logs",
        label: "secret in logs",
        severity: Severity::Medium,
        pattern: r"(?i)console\.log.*password",
        message: "a password may be written to log output",
    },
];

/// 编译后的规则集（启动期一次性构建，扫描期只读）
pub(crate) struct RuleSet {
    pub(crate) compiled: Vec<(Regex, &'static Rule)>,
}

impl RuleSet {
    /// 编译内置规则表；任何一条编译失败即整体失败
    pub(crate) fn builtin() -> Result<Self, ScanError> {
        let mut compiled = Vec::with_capacity(RULES.len());
        for rule in RULES {
            let re = Regex::new(rule.pattern)
                .map_err(|source| ScanError::Pattern { id: rule.id, source })?;
            compiled.push((re, rule));
        }
        Ok(Self { compiled })
    }
}
