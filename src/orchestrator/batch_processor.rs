//! 批量阅卷处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **扫描**：列出文件夹中的答题卡图片（失败则整批终止）
//! 2. **调度**：逐张或按并发上限上传，单张失败不影响其他答题卡
//! 3. **输出**：每张答题卡产生一条记录，按完成顺序发送到通道
//! 4. **取消**：每张答题卡开始前检查取消标记
//! 5. **统计**：汇总成功、部分失败、失败数量
//!
//! 本批使用的服务地址和阅卷参数在开始时固定为 `BatchJob` 快照。

use crate::clients::{GradingClient, GradingService};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Endpoint, GradingParameters, LogRecord, Verdict};
use crate::services::locate_images;
use crate::utils::logging::{log_batch_complete, log_images_found};
use crate::workflow::{SheetCtx, SheetFlow};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, warn};

/// 一次批量阅卷的配置快照
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub folder: PathBuf,
    pub endpoint: Endpoint,
    pub parameters: GradingParameters,
}

impl BatchJob {
    pub fn new(folder: impl Into<PathBuf>, endpoint: Endpoint, parameters: GradingParameters) -> Self {
        Self {
            folder: folder.into(),
            endpoint,
            parameters,
        }
    }

    /// 从当前配置截取快照
    pub fn from_config(config: &Config, folder: impl Into<PathBuf>) -> Self {
        Self::new(folder, config.endpoint(), config.grading_parameters())
    }
}

/// 协作式取消标记
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// 批次统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub partial: usize,
    pub failed: usize,
    /// 因取消而未处理的答题卡
    pub cancelled: usize,
}

impl BatchSummary {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Success => self.success += 1,
            Verdict::PartialFailure => self.partial += 1,
            Verdict::HardFailure => self.failed += 1,
        }
    }

    /// 已产生记录的答题卡数量
    pub fn processed(&self) -> usize {
        self.success + self.partial + self.failed
    }
}

/// 批量阅卷处理器
pub struct BatchProcessor {
    service: Arc<dyn GradingService>,
    max_concurrent: usize,
}

impl BatchProcessor {
    pub fn new(service: Arc<dyn GradingService>, max_concurrent: usize) -> Self {
        Self {
            service,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// 按配置创建 reqwest 客户端和处理器，配置不合法时直接返回错误
    pub fn from_config(config: &Config) -> AppResult<Self> {
        config.validate()?;
        let client = GradingClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.max_concurrent_uploads))
    }

    /// 处理文件夹中的所有答题卡
    ///
    /// 文件夹不存在时发送一条失败记录并返回错误，此时不会发出任何请求。
    pub async fn run(
        &self,
        job: &BatchJob,
        sink: &UnboundedSender<LogRecord>,
        cancel: &CancelFlag,
    ) -> AppResult<BatchSummary> {
        info!("📁 正在扫描答题卡: {}", job.folder.display());

        let images = match locate_images(&job.folder).await {
            Ok(images) => images,
            Err(e) => {
                error!("❌ 无法列出答题卡: {}", e);
                emit(sink, LogRecord::new(Verdict::HardFailure, e.to_string(), None));
                return Err(e);
            }
        };

        if images.is_empty() {
            warn!("⚠️ 文件夹中没有答题卡图片: {}", job.folder.display());
            return Ok(BatchSummary::default());
        }

        let total = images.len();
        log_images_found(total, self.max_concurrent, &job.endpoint);

        let flow = SheetFlow::new(self.service.as_ref(), &job.endpoint, &job.parameters);
        let flow = &flow;
        let mut summary = BatchSummary {
            total,
            ..Default::default()
        };

        let mut outcomes = stream::iter(images.into_iter().enumerate())
            .map(|(idx, path)| async move {
                if cancel.is_cancelled() {
                    debug!("已取消，跳过: {}", path.display());
                    return None;
                }
                let ctx = SheetCtx::new(idx + 1, total, path);
                Some(flow.run(&ctx).await)
            })
            .buffer_unordered(self.max_concurrent);

        while let Some(outcome) = outcomes.next().await {
            match outcome {
                Some(record) => {
                    summary.record(record.verdict);
                    emit(sink, record);
                }
                None => summary.cancelled += 1,
            }
        }

        if summary.cancelled > 0 {
            warn!("⚠️ 批次已取消，{} 张答题卡未处理", summary.cancelled);
        }
        log_batch_complete(&summary);

        Ok(summary)
    }
}

fn emit(sink: &UnboundedSender<LogRecord>, record: LogRecord) {
    if sink.send(record).is_err() {
        debug!("记录接收端已关闭");
    }
}
