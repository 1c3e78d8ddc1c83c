//! 答题卡处理上下文
//!
//! 封装"我正在处理第几张答题卡"这一信息

use std::fmt::Display;
use std::path::PathBuf;

/// 答题卡处理上下文
#[derive(Debug, Clone)]
pub struct SheetCtx {
    /// 在本批中的序号（从1开始，仅用于日志显示）
    pub index: usize,
    /// 本批答题卡总数
    pub total: usize,
    /// 图片路径
    pub path: PathBuf,
}

impl SheetCtx {
    pub fn new(index: usize, total: usize, path: PathBuf) -> Self {
        Self { index, total, path }
    }

    /// 文件名，用于日志
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

impl Display for SheetCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[答题卡 {}/{} {}]", self.index, self.total, self.file_name())
    }
}
