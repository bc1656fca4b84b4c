//! Prompt 模板
//!
//! (内容类型, 大纲) → (system message, user prompt, token 预算)

use super::request::{ContentKind, ContentSpec, LessonParams, Syllabus};
use crate::config::GenerationConfig;

pub const LESSON_PLAN_SYSTEM_MESSAGE: &str = "You are a helpful assistant for Kenyan teachers, specializing in generating lesson plans for CBC and 8-4-4 syllabuses.";
pub const NOTES_SYSTEM_MESSAGE: &str = "You are a helpful assistant for Kenyan teachers, specializing in generating educational notes for CBC and 8-4-4 syllabuses.";

/// 引入和总结各占 5 分钟，其余为课堂展开
pub const INTRODUCTION_MINUTES: f64 = 5.0;
pub const CONCLUSION_MINUTES: f64 = 5.0;

const DISPLAY_INSTRUCTION: &str =
    "The output should be a well-formatted text, suitable for direct display.";

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    lesson_plan_max_tokens: u32,
    notes_max_tokens: u32,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(1000, 1500)
    }
}

impl PromptBuilder {
    pub fn new(lesson_plan_max_tokens: u32, notes_max_tokens: u32) -> Self {
        Self {
            lesson_plan_max_tokens,
            notes_max_tokens,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.lesson_plan_max_tokens, config.notes_max_tokens)
    }

    pub fn build(&self, spec: &ContentSpec) -> Prompt {
        match spec.kind {
            ContentKind::LessonPlan(params) => Prompt {
                system: LESSON_PLAN_SYSTEM_MESSAGE,
                user: lesson_plan_prompt(spec, &params),
                max_tokens: self.lesson_plan_max_tokens,
            },
            ContentKind::Notes => Prompt {
                system: NOTES_SYSTEM_MESSAGE,
                user: notes_prompt(spec),
                max_tokens: self.notes_max_tokens,
            },
        }
    }
}

/// 课堂展开时长，课时过短时可能为负数，按原样写入 prompt
pub fn development_minutes(lesson_time_minutes: f64) -> f64 {
    lesson_time_minutes - (INTRODUCTION_MINUTES + CONCLUSION_MINUTES)
}

/// 整数不带小数点：40.0 → "40"，40.5 → "40.5"
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// "Grade 7, Subject: Science, Strand: Living Things, Substrand: Plants"
fn subject_line(spec: &ContentSpec) -> String {
    let syllabus = spec.syllabus;
    format!(
        "{} {}, Subject: {}, {}: {}, {}: {}",
        syllabus.level_label(),
        spec.grade,
        spec.subject,
        syllabus.strand_label(),
        spec.strand_topic,
        syllabus.substrand_label(),
        spec.substrand_subtopic
    )
}

fn lesson_plan_prompt(spec: &ContentSpec, params: &LessonParams) -> String {
    let structure = format!(
        "Introduction ({} mins), Lesson Development ({} mins), Conclusion ({} mins).",
        format_number(INTRODUCTION_MINUTES),
        format_number(development_minutes(params.lesson_time_minutes)),
        format_number(CONCLUSION_MINUTES)
    );

    let mut sentences = vec![format!(
        "Generate a detailed {} lesson plan for {}.",
        spec.syllabus.name(),
        subject_line(spec)
    )];

    match spec.syllabus {
        Syllabus::Cbc => {
            sentences
                .push("Include: Key Inquiry Question, Core Competencies, Values, PCI links.".into());
            sentences.push(format!("Structure: {}", structure));
        }
        Syllabus::EightFourFour => {
            sentences.push(format!("Include: Objectives, {}", structure));
        }
    }

    sentences.push(format!(
        "Number of students: {}. Lesson time: {} minutes.",
        format_number(params.number_of_students),
        format_number(params.lesson_time_minutes)
    ));
    sentences.push(
        "Ensure the plan is comprehensive and suitable for Kenyan education context.".into(),
    );
    sentences.push(DISPLAY_INSTRUCTION.into());
    sentences.join(" ")
}

fn notes_prompt(spec: &ContentSpec) -> String {
    [
        format!(
            "Generate comprehensive notes for {}, based on the {} syllabus.",
            subject_line(spec),
            spec.syllabus.name()
        ),
        "Ensure the notes are detailed, accurate, and suitable for Kenyan students.".into(),
        DISPLAY_INSTRUCTION.into(),
    ]
    .join(" ")
}
