//! 安全规则扫描核心库
//!
//! 设计要点：
//! - 规则即数据：内置规则表在启动期一次性编译为 `RuleSet`，逐文件独立应用。
//! - 首次命中语义：同一规则对同一文件最多产生一条检出，不统计出现次数。
//! - 单文件读取失败只告警并跳过，绝不中断整个扫描。
//! - 文件列表先收集再按路径排序，保证输出顺序可复现。

mod engine;
mod error;
mod report;
mod rules;
mod scan;
mod types;

pub use error::ScanError;
pub use report::report;
pub use scan::Scanner;
pub use types::{Finding, ScanStats, Severity};
