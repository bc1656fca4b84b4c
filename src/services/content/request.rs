//! 内容生成请求：宽松反序列化 + 严格校验
//!
//! 请求体字段全部可选，由 `validate` 决定是否齐全，
//! 这样缺字段、空字符串、`null` 都返回同一条 400 信息。

use serde::Deserialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use super::prompt::format_number;
use crate::errors::{EdunjemaError, Result};

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters for content generation.";
pub const MISSING_LESSON_PARAMETERS_MESSAGE: &str = "Missing required parameters for lesson plan generation: numberOfStudents, lessonTimeMinutes.";
pub const INVALID_CONTENT_TYPE_MESSAGE: &str =
    "Invalid content type specified. Must be \"lesson_plan\" or \"notes\".";

/// 原始请求体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[serde(rename = "type", default)]
    pub content_type: Option<Value>,
    #[serde(default)]
    pub syllabus: Option<Value>,
    #[serde(default)]
    pub grade: Option<Value>,
    #[serde(default)]
    pub subject: Option<Value>,
    #[serde(default)]
    pub strand_topic: Option<Value>,
    #[serde(default)]
    pub substrand_subtopic: Option<Value>,
    #[serde(default)]
    pub number_of_students: Option<Value>,
    #[serde(default)]
    pub lesson_time_minutes: Option<Value>,
}

/// 内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ContentType {
    LessonPlan,
    Notes,
}

/// 教学大纲
///
/// 只有精确的 `"CBC"` 被识别为 CBC，其余一律按 8-4-4 处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syllabus {
    Cbc,
    EightFourFour,
}

impl Syllabus {
    pub fn from_label(label: &str) -> Self {
        if label == "CBC" {
            Syllabus::Cbc
        } else {
            Syllabus::EightFourFour
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Syllabus::Cbc => "CBC",
            Syllabus::EightFourFour => "8-4-4",
        }
    }

    /// CBC 按年级（Grade），8-4-4 按年级组（Form）
    pub fn level_label(&self) -> &'static str {
        match self {
            Syllabus::Cbc => "Grade",
            Syllabus::EightFourFour => "Form",
        }
    }

    pub fn strand_label(&self) -> &'static str {
        match self {
            Syllabus::Cbc => "Strand",
            Syllabus::EightFourFour => "Topic",
        }
    }

    pub fn substrand_label(&self) -> &'static str {
        match self {
            Syllabus::Cbc => "Substrand",
            Syllabus::EightFourFour => "Subtopic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonParams {
    pub number_of_students: f64,
    pub lesson_time_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentKind {
    LessonPlan(LessonParams),
    Notes,
}

impl ContentKind {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentKind::LessonPlan(_) => ContentType::LessonPlan,
            ContentKind::Notes => ContentType::Notes,
        }
    }
}

/// 校验通过的请求
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSpec {
    pub kind: ContentKind,
    pub syllabus: Syllabus,
    pub grade: String,
    pub subject: String,
    pub strand_topic: String,
    pub substrand_subtopic: String,
}

impl ContentRequest {
    /// 按顺序校验：公共字段齐全 → 教案数值字段 → 内容类型
    pub fn validate(&self) -> Result<ContentSpec> {
        let (
            Some(content_type),
            Some(syllabus),
            Some(grade),
            Some(subject),
            Some(strand_topic),
            Some(substrand_subtopic),
        ) = (
            text_field(&self.content_type),
            text_field(&self.syllabus),
            text_field(&self.grade),
            text_field(&self.subject),
            text_field(&self.strand_topic),
            text_field(&self.substrand_subtopic),
        )
        else {
            return Err(EdunjemaError::validation(MISSING_PARAMETERS_MESSAGE));
        };

        let kind = match content_type.parse::<ContentType>() {
            Ok(ContentType::LessonPlan) => {
                let (Some(number_of_students), Some(lesson_time_minutes)) = (
                    numeric_field(&self.number_of_students),
                    numeric_field(&self.lesson_time_minutes),
                ) else {
                    return Err(EdunjemaError::validation(MISSING_LESSON_PARAMETERS_MESSAGE));
                };
                ContentKind::LessonPlan(LessonParams {
                    number_of_students,
                    lesson_time_minutes,
                })
            }
            Ok(ContentType::Notes) => ContentKind::Notes,
            Err(_) => return Err(EdunjemaError::validation(INVALID_CONTENT_TYPE_MESSAGE)),
        };

        Ok(ContentSpec {
            kind,
            syllabus: Syllabus::from_label(&syllabus),
            grade,
            subject,
            strand_topic,
            substrand_subtopic,
        })
    }
}

/// 非空字符串、非零数字或 `true` 视为已提供；数字按 f64 输出，7.0 → "7"
fn text_field(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n.as_f64().filter(|f| *f != 0.0).map(format_number),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// 只接受 JSON 数字，字符串形式的数字不算
fn numeric_field(value: &Option<Value>) -> Option<f64> {
    match value.as_ref()? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
