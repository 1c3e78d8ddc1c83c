//! 阅卷记录的终端显示
//!
//! 白字，背景色表示结论：绿色成功，黄色部分识别失败，红色失败。

use crate::models::{LogRecord, Verdict};
use colored::{ColoredString, Colorize};
use tokio::sync::mpsc::UnboundedReceiver;

/// 为记录着色
pub fn colorize(record: &LogRecord) -> ColoredString {
    let line = record.render().white();
    match record.verdict {
        Verdict::Success => line.on_green(),
        Verdict::PartialFailure => line.on_yellow(),
        Verdict::HardFailure => line.on_red(),
    }
}

/// 持续打印通道中的记录，直到发送端全部关闭；返回打印的条数
pub async fn print_records(mut records: UnboundedReceiver<LogRecord>) -> usize {
    let mut count = 0;
    while let Some(record) = records.recv().await {
        println!("{}", colorize(&record));
        count += 1;
    }
    count
}
