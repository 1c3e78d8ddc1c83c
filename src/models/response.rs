use serde::Deserialize;

/// 学生信息
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    /// 学号（服务端可能返回字符串或整数）
    #[serde(rename = "No", deserialize_with = "deserialize_student_no")]
    pub no: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// 识别结果
///
/// 选择题中的空字符串、填空题中的 -1 表示该题未能识别。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecognitionResult {
    #[serde(rename = "SingleChoices", default)]
    pub single_choices: Option<Vec<String>>,
    // 服务端字段名拼写如此
    #[serde(rename = "MuitpleChoices", default)]
    pub multiple_choices: Option<Vec<String>>,
    #[serde(rename = "Blanks", default)]
    pub blanks: Option<Vec<i64>>,
}

impl RecognitionResult {
    pub fn single_choices(&self) -> &[String] {
        self.single_choices.as_deref().unwrap_or_default()
    }

    pub fn multiple_choices(&self) -> &[String] {
        self.multiple_choices.as_deref().unwrap_or_default()
    }

    pub fn blanks(&self) -> &[i64] {
        self.blanks.as_deref().unwrap_or_default()
    }
}

/// HTTP 200 时的响应体
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GradedSheet {
    #[serde(rename = "Student")]
    pub student: Student,
    #[serde(rename = "Result")]
    pub result: RecognitionResult,
}

/// 非 200 时的响应体
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 阅卷服务的应答
///
/// 网络层失败不在此列，由 `GradingError` 表示。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradingResponse {
    /// HTTP 200，服务端完成了识别
    Graded(GradedSheet),
    /// 非 200，服务端报告了错误
    Rejected { status: u16, message: String },
}

// 学号既可能是字符串也可能是整数
fn deserialize_student_no<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct StudentNoVisitor;

    impl<'de> Visitor<'de> for StudentNoVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer student number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StudentNoVisitor)
}
