use std::path::PathBuf;

/// 应用程序错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 答题卡文件夹不存在或不是文件夹
    #[error("目录不存在: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// 读取文件夹失败
    #[error("无法读取文件夹 ({}): {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 读取图片失败
    #[error("读取图片失败 ({}): {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 阅卷请求失败
    #[error(transparent)]
    Grading(#[from] GradingError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// HTTP 客户端创建失败
    #[error("HTTP 客户端创建失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// 阅卷接口调用错误（网络、超时、响应格式）
#[derive(Debug, thiserror::Error)]
pub enum GradingError {
    /// 网络请求失败（连接失败、超时等）
    #[error("阅卷请求失败: {0}")]
    Request(#[source] reqwest::Error),

    /// 响应体读取失败
    #[error("读取阅卷响应失败: {0}")]
    UnreadableBody(#[source] reqwest::Error),

    /// 响应体不是预期的 JSON 结构
    #[error("阅卷响应格式错误 (HTTP {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 配置值解析失败
    #[error("{key} 解析失败: 值 '{value}' 无法转换为 {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// 配置文件读取失败
    #[error("无法读取配置文件 ({}): {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("配置文件解析失败 ({}): {source}", .path.display())]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 配置值不合法
    #[error("{key} 不合法: {reason}")]
    OutOfRange { key: &'static str, reason: &'static str },
}

// ========== 便捷构造函数 ==========

impl ConfigError {
    /// 创建配置值解析错误
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
