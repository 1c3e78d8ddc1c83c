//! 答题卡处理流程 - 流程层
//!
//! 核心职责：定义"一张答题卡"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取图片并编码
//! 2. 上传阅卷
//! 3. 判定识别结果
//! 4. 生成一条阅卷记录
//!
//! 任何一步失败都只影响当前答题卡，最终总会得到一条记录。

use tracing::{error, info, warn};

use crate::clients::GradingService;
use crate::error::AppResult;
use crate::models::{Endpoint, GradingParameters, GradingResponse, LogRecord, Verdict};
use crate::services::{classify, encode_image};
use crate::workflow::sheet_ctx::SheetCtx;

/// 答题卡处理流程
///
/// - 不持有任何资源，只借用阅卷能力和本批的配置快照
/// - 不渲染记录，交给调用方决定如何展示
pub struct SheetFlow<'a> {
    service: &'a dyn GradingService,
    endpoint: &'a Endpoint,
    parameters: &'a GradingParameters,
}

impl<'a> SheetFlow<'a> {
    pub fn new(
        service: &'a dyn GradingService,
        endpoint: &'a Endpoint,
        parameters: &'a GradingParameters,
    ) -> Self {
        Self {
            service,
            endpoint,
            parameters,
        }
    }

    /// 处理一张答题卡，总是返回一条记录
    pub async fn run(&self, ctx: &SheetCtx) -> LogRecord {
        info!("{} 📤 开始上传", ctx);

        let (verdict, text) = match self.grade(ctx).await {
            Ok(GradingResponse::Graded(sheet)) => {
                let classification = classify(&sheet);
                let verdict = classification.verdict;
                let text = classification.text;
                match verdict {
                    Verdict::Success => info!("{} ✓ [{}] {}", ctx, verdict.name(), text),
                    _ => warn!("{} ⚠️ [{}] {}", ctx, verdict.name(), text),
                }
                (verdict, text)
            }
            Ok(GradingResponse::Rejected { status, message }) => {
                error!(
                    "{} ❌ [{}] 阅卷服务返回错误 (HTTP {}): {}",
                    ctx,
                    Verdict::HardFailure.name(),
                    status,
                    message
                );
                (Verdict::HardFailure, message)
            }
            Err(e) => {
                error!("{} ❌ [{}] 处理失败: {}", ctx, Verdict::HardFailure.name(), e);
                (Verdict::HardFailure, e.to_string())
            }
        };

        LogRecord::new(verdict, text, Some(ctx.path.clone()))
    }

    async fn grade(&self, ctx: &SheetCtx) -> AppResult<GradingResponse> {
        let encoded = encode_image(&ctx.path).await?;
        let response = self
            .service
            .submit(self.endpoint, self.parameters, &encoded)
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradingError;
    use crate::models::{GradedSheet, RecognitionResult, Student};
    use async_trait::async_trait;
    use std::path::PathBuf;

    enum Reply {
        Graded(Vec<&'static str>),
        Rejected(&'static str),
        Broken,
    }

    struct StubService(Reply);

    #[async_trait]
    impl GradingService for StubService {
        async fn submit(
            &self,
            _endpoint: &Endpoint,
            _parameters: &GradingParameters,
            _image_base64: &str,
        ) -> Result<GradingResponse, GradingError> {
            match &self.0 {
                Reply::Graded(single) => Ok(GradingResponse::Graded(GradedSheet {
                    student: Student {
                        no: "2023001".to_string(),
                        name: "张三".to_string(),
                    },
                    result: RecognitionResult {
                        single_choices: Some(single.iter().map(|s| s.to_string()).collect()),
                        ..Default::default()
                    },
                })),
                Reply::Rejected(message) => Ok(GradingResponse::Rejected {
                    status: 400,
                    message: message.to_string(),
                }),
                Reply::Broken => Err(GradingError::MalformedBody {
                    status: 200,
                    source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
                }),
            }
        }
    }

    async fn run_with(reply: Reply, path: PathBuf) -> LogRecord {
        let service = StubService(reply);
        let endpoint = Endpoint::default();
        let parameters = GradingParameters::default();
        let flow = SheetFlow::new(&service, &endpoint, &parameters);
        flow.run(&SheetCtx::new(1, 1, path)).await
    }

    fn sheet_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("sheet.jpg");
        std::fs::write(&path, b"fake image").unwrap();
        path
    }

    #[tokio::test]
    async fn test_success_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = run_with(Reply::Graded(vec!["A", "B"]), sheet_file(&dir)).await;
        assert_eq!(record.verdict, Verdict::Success);
        assert_eq!(record.text, "2023001(张三)阅卷成功。");
        assert_eq!(record.image, Some(dir.path().join("sheet.jpg")));
    }

    #[tokio::test]
    async fn test_partial_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = run_with(Reply::Graded(vec!["A", ""]), sheet_file(&dir)).await;
        assert_eq!(record.verdict, Verdict::PartialFailure);
        assert_eq!(record.text, "2023001(张三): 单选(2)识别失败。");
    }

    #[tokio::test]
    async fn test_rejected_record_carries_server_message() {
        let dir = tempfile::tempdir().unwrap();
        let record = run_with(Reply::Rejected("invalid image"), sheet_file(&dir)).await;
        assert_eq!(record.verdict, Verdict::HardFailure);
        assert!(record.text.contains("invalid image"));
    }

    #[tokio::test]
    async fn test_transport_failure_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = run_with(Reply::Broken, sheet_file(&dir)).await;
        assert_eq!(record.verdict, Verdict::HardFailure);
        assert!(record.text.contains("阅卷响应格式错误"));
    }

    #[tokio::test]
    async fn test_unreadable_image_record() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.jpg");
        let record = run_with(Reply::Graded(vec!["A"]), missing.clone()).await;
        assert_eq!(record.verdict, Verdict::HardFailure);
        assert!(record.text.contains("读取图片失败"));
        assert_eq!(record.image, Some(missing));
    }
}
