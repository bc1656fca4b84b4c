//! HTTP 接口层
//!
//! - `services`: 路由与 handler
//! - `middleware`: 请求 ID

pub mod constants;
pub mod middleware;
pub mod services;
