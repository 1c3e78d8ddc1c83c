//! 识别结果判定 - 业务能力层
//!
//! 检查服务端返回的每道题，找出未识别的题目。
//! 多选题全部未填涂与识别失败无法区分，这里一律视为识别失败。

use crate::models::{GradedSheet, Verdict};

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    Blank,
}

impl QuestionKind {
    /// 日志中显示的题型名称
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "单选",
            QuestionKind::MultipleChoice => "多选",
            QuestionKind::Blank => "填空",
        }
    }
}

/// 填空题未识别时服务端返回的值
const UNRECOGNIZED_BLANK: i64 = -1;

/// 判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    /// 未识别的题目，如 `单选(2)`
    pub unrecognized: Vec<String>,
    /// 日志文本
    pub text: String,
}

/// 判定一张答题卡的识别结果
pub fn classify(sheet: &GradedSheet) -> Classification {
    let result = &sheet.result;
    let mut unrecognized = Vec::new();

    collect_unrecognized(
        &mut unrecognized,
        QuestionKind::SingleChoice,
        result.single_choices(),
        |answer| answer.is_empty(),
    );
    collect_unrecognized(
        &mut unrecognized,
        QuestionKind::MultipleChoice,
        result.multiple_choices(),
        |answer| answer.is_empty(),
    );
    collect_unrecognized(
        &mut unrecognized,
        QuestionKind::Blank,
        result.blanks(),
        |value| *value == UNRECOGNIZED_BLANK,
    );

    let student = &sheet.student;
    if unrecognized.is_empty() {
        Classification {
            verdict: Verdict::Success,
            text: format!("{}({})阅卷成功。", student.no, student.name),
            unrecognized,
        }
    } else {
        Classification {
            verdict: Verdict::PartialFailure,
            text: format!(
                "{}({}): {}识别失败。",
                student.no,
                student.name,
                unrecognized.join(",")
            ),
            unrecognized,
        }
    }
}

fn collect_unrecognized<T>(
    out: &mut Vec<String>,
    kind: QuestionKind,
    answers: &[T],
    is_unrecognized: impl Fn(&T) -> bool,
) {
    for (index, answer) in answers.iter().enumerate() {
        if is_unrecognized(answer) {
            out.push(format!("{}({})", kind.label(), index + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecognitionResult, Student};

    fn sheet(single: &[&str], multiple: &[&str], blanks: &[i64]) -> GradedSheet {
        GradedSheet {
            student: Student {
                no: "2023001".to_string(),
                name: "张三".to_string(),
            },
            result: RecognitionResult {
                single_choices: Some(single.iter().map(|s| s.to_string()).collect()),
                multiple_choices: Some(multiple.iter().map(|s| s.to_string()).collect()),
                blanks: Some(blanks.to_vec()),
            },
        }
    }

    #[test]
    fn test_empty_single_choice_is_unrecognized() {
        let c = classify(&sheet(&["A", "", "B"], &[], &[]));
        assert_eq!(c.unrecognized, ["单选(2)"]);
        assert_eq!(c.verdict, Verdict::PartialFailure);
    }

    #[test]
    fn test_negative_blank_is_unrecognized() {
        let c = classify(&sheet(&[], &[], &[1, -1, 3]));
        assert_eq!(c.unrecognized, ["填空(2)"]);
        assert_eq!(c.verdict, Verdict::PartialFailure);
    }

    #[test]
    fn test_all_filled_is_success() {
        let c = classify(&sheet(&["A", "B"], &["AB"], &[1, 2]));
        assert_eq!(c.verdict, Verdict::Success);
        assert!(c.unrecognized.is_empty());
        assert_eq!(c.text, "2023001(张三)阅卷成功。");
    }

    #[test]
    fn test_labels_keep_category_order() {
        let c = classify(&sheet(&["", "C"], &["", "AD", ""], &[-1]));
        assert_eq!(c.unrecognized, ["单选(1)", "多选(1)", "多选(3)", "填空(1)"]);
        assert_eq!(
            c.text,
            "2023001(张三): 单选(1),多选(1),多选(3),填空(1)识别失败。"
        );
    }

    #[test]
    fn test_other_negative_blanks_are_answers() {
        let c = classify(&sheet(&[], &[], &[-2, 0]));
        assert_eq!(c.verdict, Verdict::Success);
    }

    #[test]
    fn test_missing_categories_are_success() {
        let graded = GradedSheet {
            student: Student {
                no: "7".to_string(),
                name: "李四".to_string(),
            },
            result: RecognitionResult::default(),
        };
        let c = classify(&graded);
        assert_eq!(c.verdict, Verdict::Success);
        assert_eq!(c.text, "7(李四)阅卷成功。");
    }
}
