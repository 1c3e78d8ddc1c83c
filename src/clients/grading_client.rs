/// 阅卷服务客户端
///
/// 每次请求上传一张 Base64 编码的答题卡，阅卷参数通过 Cookie 请求头传递。
use crate::config::Config;
use crate::error::{AppError, AppResult, GradingError};
use crate::models::{Endpoint, ErrorBody, GradedSheet, GradingParameters, GradingResponse};
use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// 阅卷能力
///
/// 返回值三种情况：`Ok(Graded)`、`Ok(Rejected)`、`Err(GradingError)`。
#[async_trait]
pub trait GradingService: Send + Sync {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        parameters: &GradingParameters,
        image_base64: &str,
    ) -> Result<GradingResponse, GradingError>;
}

#[derive(Serialize)]
struct UploadBody<'a> {
    image: &'a str,
}

/// 基于 reqwest 的阅卷客户端
#[derive(Debug, Clone)]
pub struct GradingClient {
    client: Client,
}

impl GradingClient {
    /// 按配置创建客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_options(
            Duration::from_secs(config.request_timeout_secs),
            config.accept_invalid_certs,
        )
    }

    /// 指定超时与证书校验方式创建客户端
    ///
    /// `accept_invalid_certs` 为 true 时不校验服务端证书，只应用于
    /// 已知的本地或自签名阅卷服务。
    pub fn with_options(timeout: Duration, accept_invalid_certs: bool) -> AppResult<Self> {
        if accept_invalid_certs {
            warn!("⚠️ 已关闭 TLS 证书校验，仅用于可信的本地阅卷服务");
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl GradingService for GradingClient {
    async fn submit(
        &self,
        endpoint: &Endpoint,
        parameters: &GradingParameters,
        image_base64: &str,
    ) -> Result<GradingResponse, GradingError> {
        let url = endpoint.url();
        debug!("上传答题卡: {} ({} 字符)", url, image_base64.len());

        let response = self
            .client
            .post(&url)
            .header(COOKIE, parameters.cookie_header())
            .json(&UploadBody {
                image: image_base64,
            })
            .send()
            .await
            .map_err(GradingError::Request)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GradingError::UnreadableBody)?;

        debug!("阅卷响应 HTTP {}: {}", status, body);

        parse_response(status, &body)
    }
}

/// 按状态码解析响应体
fn parse_response(status: StatusCode, body: &str) -> Result<GradingResponse, GradingError> {
    let malformed = |source| GradingError::MalformedBody {
        status: status.as_u16(),
        source,
    };

    if status == StatusCode::OK {
        let sheet: GradedSheet = serde_json::from_str(body).map_err(malformed)?;
        Ok(GradingResponse::Graded(sheet))
    } else {
        let error: ErrorBody = serde_json::from_str(body).map_err(malformed)?;
        Ok(GradingResponse::Rejected {
            status: status.as_u16(),
            message: error.error,
        })
    }
}
