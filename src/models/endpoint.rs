use std::fmt;

/// 上传答题卡接口的固定路径前缀
const UPLOAD_PATH: &str = "kakarot/api/exercise-result/upload-v2";

/// 协议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 阅卷服务地址
///
/// 由协议、主机、端口、习题ID、班级ID组成，渲染为完整的上传 URL。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub exercise_id: String,
    pub clazz_id: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            host: "127.0.0.1".to_string(),
            port: 8289,
            exercise_id: "1".to_string(),
            clazz_id: "1".to_string(),
        }
    }
}

impl Endpoint {
    /// 完整的上传 URL
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}:{}/{}/exercise-{}/clazz-{}",
            self.scheme, self.host, self.port, UPLOAD_PATH, self.exercise_id, self.clazz_id
        )
    }
}
