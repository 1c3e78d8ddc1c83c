/// 答题卡朝向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperDirection {
    /// 左
    #[default]
    Left = 0,
    /// 上
    Top = 1,
    /// 右
    Right = 2,
    /// 下
    Bottom = 3,
}

impl PaperDirection {
    /// 获取发送给阅卷服务的代码
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 获取中文名称
    pub fn name(self) -> &'static str {
        match self {
            PaperDirection::Left => "左",
            PaperDirection::Top => "上",
            PaperDirection::Right => "右",
            PaperDirection::Bottom => "下",
        }
    }

    /// 从代码、中文名称或英文名称解析朝向
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "0" | "左" | "left" => Some(PaperDirection::Left),
            "1" | "上" | "top" => Some(PaperDirection::Top),
            "2" | "右" | "right" => Some(PaperDirection::Right),
            "3" | "下" | "bottom" => Some(PaperDirection::Bottom),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaperDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 阅卷参数
///
/// 一次批量阅卷期间保持不变，随每个请求以 Cookie 形式发送。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingParameters {
    /// 答题卡区域面积最大百分比
    pub regions_percent_max: u32,
    /// 填涂区域大小（百分比）
    pub fill_area_percent: u32,
    /// 答题卡朝向
    pub paper_direction: PaperDirection,
    /// 腐蚀核大小（像素）
    pub erode_kernel_size: u32,
    /// 膨胀核大小（像素）
    pub dilate_kernel_size: u32,
}

impl Default for GradingParameters {
    fn default() -> Self {
        Self {
            regions_percent_max: 60,
            fill_area_percent: 40,
            paper_direction: PaperDirection::Left,
            erode_kernel_size: 4,
            dilate_kernel_size: 4,
        }
    }
}

impl GradingParameters {
    /// 按发送顺序列出 `(键, 值)` 对
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            (
                "answer_sheet_regions_percent_max",
                self.regions_percent_max.to_string(),
            ),
            ("size_of_fill_area", self.fill_area_percent.to_string()),
            ("paper_direction", self.paper_direction.code().to_string()),
            ("erode_kernel_size", self.erode_kernel_size.to_string()),
            ("dilate_kernel_size", self.dilate_kernel_size.to_string()),
        ]
    }

    /// 生成 Cookie 请求头的值：`key=value` 以 `; ` 连接
    pub fn cookie_header(&self) -> String {
        self.pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
