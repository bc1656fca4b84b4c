//! Edunjema - lesson plan and notes generator for Kenyan teachers
//!
//! Accepts a small JSON request (syllabus, grade, subject, strand/topic,
//! substrand/subtopic), renders a CBC or 8-4-4 prompt and forwards it to an
//! OpenAI-compatible completion API.
//!
//! # Architecture
//! - `api`: HTTP routes, handlers and middleware
//! - `services`: request validation, prompt templates, generation providers
//! - `config`: TOML + environment configuration
//! - `runtime`: startup and the server mode
//! - `system`: logging

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod system;
