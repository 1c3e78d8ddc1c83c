//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理一个文件夹的 Vec<PathBuf>)
//!     ↓
//! workflow::SheetFlow (处理单张答题卡)
//!     ↓
//! services / clients (能力层：查找、编码、上传、判定)
//! ```
//!
//! 编排层只做调度和统计，不做具体业务判断。

pub mod batch_processor;

pub use batch_processor::{BatchJob, BatchProcessor, BatchSummary, CancelFlag};
