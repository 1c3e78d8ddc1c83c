//! # Answer Sheet Grader
//!
//! 答题卡批量阅卷工具：把文件夹中的答题卡图片逐张上传到阅卷服务，
//! 并为每张答题卡生成一条带时间的阅卷记录
//!
//! ## 架构设计
//!
//! ### ① 能力层（Services / Clients）
//! - `services::image_locator` - 列出文件夹中的答题卡图片
//! - `services::image_encoder` - 图片转 Base64
//! - `clients::GradingClient` - 上传阅卷，解析两种响应
//! - `services::result_classifier` - 判定未识别的题目
//!
//! ### ② 流程层（Workflow）
//! - `SheetFlow` - 单张答题卡：编码 → 上传 → 判定 → 记录
//!
//! ### ③ 编排层（Orchestration）
//! - `BatchProcessor` - 批量处理、并发控制、取消、统计
//!
//! 记录通过通道发出，如何显示由调用方决定（见 `utils::render`）。

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{GradingClient, GradingService};
pub use config::Config;
pub use error::{AppError, AppResult, ConfigError, GradingError};
pub use models::{Endpoint, GradingParameters, GradingResponse, LogRecord, PaperDirection, Verdict};
pub use orchestrator::{BatchJob, BatchProcessor, BatchSummary, CancelFlag};
pub use workflow::{SheetCtx, SheetFlow};
