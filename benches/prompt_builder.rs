//! 请求校验与 prompt 渲染基准测试

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

use edunjema::services::content::{ContentRequest, PromptBuilder};

fn lesson_plan_request() -> ContentRequest {
    serde_json::from_value(json!({
        "type": "lesson_plan",
        "syllabus": "CBC",
        "grade": "8",
        "subject": "Mathematics",
        "strandTopic": "Measurements",
        "substrandSubtopic": "Pythagorean relationship",
        "numberOfStudents": 45,
        "lessonTimeMinutes": 40
    }))
    .expect("valid request")
}

fn notes_request() -> ContentRequest {
    serde_json::from_value(json!({
        "type": "notes",
        "syllabus": "8-4-4",
        "grade": 2,
        "subject": "Biology",
        "strandTopic": "Transport in plants and animals",
        "substrandSubtopic": "Transpiration"
    }))
    .expect("valid request")
}

// ============== validate 基准测试 ==============

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("content/validate");

    let lesson = lesson_plan_request();
    group.bench_function("lesson_plan", |b| {
        b.iter(|| black_box(&lesson).validate().unwrap());
    });

    let invalid = ContentRequest::default();
    group.bench_function("missing_fields", |b| {
        b.iter(|| assert!(black_box(&invalid).validate().is_err()));
    });

    group.finish();
}

// ============== build 基准测试 ==============

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("content/build_prompt");
    let builder = PromptBuilder::default();

    let lesson = lesson_plan_request().validate().unwrap();
    group.bench_function("cbc_lesson_plan", |b| {
        b.iter(|| builder.build(black_box(&lesson)));
    });

    let notes = notes_request().validate().unwrap();
    group.bench_function("844_notes", |b| {
        b.iter(|| builder.build(black_box(&notes)));
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_build);
criterion_main!(benches);
