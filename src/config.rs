use crate::error::ConfigError;
use crate::models::{Endpoint, GradingParameters, PaperDirection, Scheme};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- 阅卷服务地址 ---
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub exercise_id: String,
    pub clazz_id: String,
    // --- 阅卷参数 ---
    pub regions_percent_max: u32,
    pub fill_area_percent: u32,
    pub paper_direction: PaperDirection,
    pub erode_kernel_size: u32,
    pub dilate_kernel_size: u32,
    /// 答题卡图片所在文件夹
    pub image_folder: Option<PathBuf>,
    /// 单个请求超时（秒）
    pub request_timeout_secs: u64,
    /// 同时上传的答题卡数量，1 表示逐张上传
    pub max_concurrent_uploads: usize,
    /// 不校验 TLS 证书（自签名的本地阅卷服务）
    pub accept_invalid_certs: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        let endpoint = Endpoint::default();
        let params = GradingParameters::default();
        Self {
            scheme: endpoint.scheme,
            host: endpoint.host,
            port: endpoint.port,
            exercise_id: endpoint.exercise_id,
            clazz_id: endpoint.clazz_id,
            regions_percent_max: params.regions_percent_max,
            fill_area_percent: params.fill_area_percent,
            paper_direction: params.paper_direction,
            erode_kernel_size: params.erode_kernel_size,
            dilate_kernel_size: params.dilate_kernel_size,
            image_folder: None,
            request_timeout_secs: 30,
            max_concurrent_uploads: 1,
            accept_invalid_certs: true,
            verbose_logging: false,
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    exercise_id: Option<String>,
    clazz_id: Option<String>,
    regions_percent_max: Option<u32>,
    fill_area_percent: Option<u32>,
    paper_direction: Option<String>,
    erode_kernel_size: Option<u32>,
    dilate_kernel_size: Option<u32>,
    image_folder: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
    max_concurrent_uploads: Option<usize>,
    accept_invalid_certs: Option<bool>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 先读取 `GRADER_CONFIG` 指定的配置文件（如果有），再用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("GRADER_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_toml_file(Path::new(&path))?,
            _ => Self::default(),
        };
        let config = base.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件读取，未出现的字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::default().merge_file(file)
    }

    fn merge_file(mut self, file: FileConfig) -> Result<Self, ConfigError> {
        if let Some(v) = file.scheme {
            self.scheme = Scheme::parse(&v)
                .ok_or_else(|| ConfigError::invalid_value("scheme", v, "http/https"))?;
        }
        if let Some(v) = file.paper_direction {
            self.paper_direction = PaperDirection::parse(&v)
                .ok_or_else(|| ConfigError::invalid_value("paper_direction", v, "0-3/左上右下"))?;
        }
        self.host = file.host.unwrap_or(self.host);
        self.port = file.port.unwrap_or(self.port);
        self.exercise_id = file.exercise_id.unwrap_or(self.exercise_id);
        self.clazz_id = file.clazz_id.unwrap_or(self.clazz_id);
        self.regions_percent_max = file.regions_percent_max.unwrap_or(self.regions_percent_max);
        self.fill_area_percent = file.fill_area_percent.unwrap_or(self.fill_area_percent);
        self.erode_kernel_size = file.erode_kernel_size.unwrap_or(self.erode_kernel_size);
        self.dilate_kernel_size = file.dilate_kernel_size.unwrap_or(self.dilate_kernel_size);
        self.image_folder = file.image_folder.or(self.image_folder);
        self.request_timeout_secs = file.request_timeout_secs.unwrap_or(self.request_timeout_secs);
        self.max_concurrent_uploads = file
            .max_concurrent_uploads
            .unwrap_or(self.max_concurrent_uploads);
        self.accept_invalid_certs = file.accept_invalid_certs.unwrap_or(self.accept_invalid_certs);
        self.verbose_logging = file.verbose_logging.unwrap_or(self.verbose_logging);
        Ok(self)
    }

    /// 用 `lookup` 返回的值覆盖已有配置，未设置的键保持不变
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GRADER_SCHEME") {
            self.scheme = Scheme::parse(&v)
                .ok_or_else(|| ConfigError::invalid_value("GRADER_SCHEME", v, "http/https"))?;
        }
        if let Some(v) = lookup("PAPER_DIRECTION") {
            self.paper_direction = PaperDirection::parse(&v).ok_or_else(|| {
                ConfigError::invalid_value("PAPER_DIRECTION", v, "0-3/左上右下")
            })?;
        }
        if let Some(v) = lookup("GRADER_HOST") {
            self.host = v;
        }
        if let Some(v) = lookup("EXERCISE_ID") {
            self.exercise_id = v;
        }
        if let Some(v) = lookup("CLAZZ_ID") {
            self.clazz_id = v;
        }
        if let Some(v) = lookup("IMAGE_FOLDER") {
            self.image_folder = Some(PathBuf::from(v));
        }
        parse_into(&lookup, "GRADER_PORT", "u16", &mut self.port)?;
        parse_into(&lookup, "REGIONS_PERCENT_MAX", "u32", &mut self.regions_percent_max)?;
        parse_into(&lookup, "FILL_AREA_PERCENT", "u32", &mut self.fill_area_percent)?;
        parse_into(&lookup, "ERODE_KERNEL_SIZE", "u32", &mut self.erode_kernel_size)?;
        parse_into(&lookup, "DILATE_KERNEL_SIZE", "u32", &mut self.dilate_kernel_size)?;
        parse_into(&lookup, "REQUEST_TIMEOUT_SECS", "u64", &mut self.request_timeout_secs)?;
        parse_into(&lookup, "MAX_CONCURRENT_UPLOADS", "usize", &mut self.max_concurrent_uploads)?;
        parse_into(&lookup, "ACCEPT_INVALID_CERTS", "bool", &mut self.accept_invalid_certs)?;
        parse_into(&lookup, "VERBOSE_LOGGING", "bool", &mut self.verbose_logging)?;
        Ok(self)
    }

    /// 检查取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_uploads == 0 {
            return Err(ConfigError::OutOfRange {
                key: "max_concurrent_uploads",
                reason: "至少为 1",
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::OutOfRange {
                key: "request_timeout_secs",
                reason: "必须大于 0",
            });
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::OutOfRange {
                key: "host",
                reason: "不能为空",
            });
        }
        Ok(())
    }

    /// 当前配置对应的阅卷服务地址
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            scheme: self.scheme,
            host: self.host.clone(),
            port: self.port,
            exercise_id: self.exercise_id.clone(),
            clazz_id: self.clazz_id.clone(),
        }
    }

    /// 当前配置对应的阅卷参数
    pub fn grading_parameters(&self) -> GradingParameters {
        GradingParameters {
            regions_percent_max: self.regions_percent_max,
            fill_area_percent: self.fill_area_percent,
            paper_direction: self.paper_direction,
            erode_kernel_size: self.erode_kernel_size,
            dilate_kernel_size: self.dilate_kernel_size,
        }
    }
}

fn parse_into<F, T>(
    lookup: &F,
    key: &str,
    expected: &'static str,
    target: &mut T,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(key, raw.clone(), expected))?;
    }
    Ok(())
}
