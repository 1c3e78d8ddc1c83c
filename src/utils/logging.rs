/// 日志工具模块
///
/// 提供日志初始化和批次信息输出的辅助函数
use crate::config::Config;
use crate::models::Endpoint;
use crate::orchestrator::BatchSummary;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info 级别。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答题卡批量阅卷");
    info!("🌐 阅卷地址: {}", config.endpoint());
    info!("📊 最大并发数: {}", config.max_concurrent_uploads);
    info!("{}", "=".repeat(60));
}

/// 记录答题卡扫描结果
pub fn log_images_found(total: usize, max_concurrent: usize, endpoint: &Endpoint) {
    info!("✓ 找到 {} 张待阅答题卡", total);
    if max_concurrent > 1 {
        info!("📋 同时上传 {} 张", max_concurrent);
    } else {
        info!("📋 逐张上传");
    }
    info!("📤 上传至: {}\n", endpoint);
}

/// 打印批次统计信息
pub fn log_batch_complete(summary: &BatchSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 阅卷完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.success, summary.total);
    info!("⚠️ 部分识别失败: {}", summary.partial);
    info!("❌ 失败: {}", summary.failed);
    if summary.cancelled > 0 {
        info!("⏹ 未处理: {}", summary.cancelled);
    }
    info!("{}", "=".repeat(60));
}
