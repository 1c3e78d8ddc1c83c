use chrono::{DateTime, Local};
use std::path::PathBuf;

/// 单张答题卡的阅卷结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// 阅卷成功
    Success,
    /// 部分题目识别失败
    PartialFailure,
    /// 阅卷失败（服务端错误、网络错误、读取失败）
    HardFailure,
}

impl Verdict {
    pub fn name(self) -> &'static str {
        match self {
            Verdict::Success => "成功",
            Verdict::PartialFailure => "部分识别失败",
            Verdict::HardFailure => "失败",
        }
    }
}

/// 阅卷记录
///
/// 只追加，不修改。`image` 为空表示批次级别的记录（例如文件夹不存在）。
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub verdict: Verdict,
    pub text: String,
    pub image: Option<PathBuf>,
}

impl LogRecord {
    pub fn new(verdict: Verdict, text: impl Into<String>, image: Option<PathBuf>) -> Self {
        Self {
            timestamp: Local::now(),
            verdict,
            text: text.into(),
            image,
        }
    }

    /// `HH:MM:SS:内容`
    pub fn render(&self) -> String {
        format!("{}:{}", self.timestamp.format("%H:%M:%S"), self.text)
    }
}
