use anyhow::{Context, Result};
use answer_sheet_grader::utils::{logging, render};
use answer_sheet_grader::{BatchJob, BatchProcessor, CancelFlag, Config};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    // 命令行参数优先于配置中的文件夹
    let folder = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.image_folder.clone())
        .context("请指定答题卡所在文件夹（命令行参数或 IMAGE_FOLDER）")?;

    let processor = BatchProcessor::from_config(&config)?;
    let job = BatchJob::from_config(&config, folder);

    // Ctrl-C 后不再开始新的答题卡
    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("⏹ 收到中断信号，当前答题卡完成后停止");
                cancel.cancel();
            }
        });
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(render::print_records(rx));

    let result = processor.run(&job, &tx, &cancel).await;
    drop(tx);
    printer.await?;

    result?;
    Ok(())
}
