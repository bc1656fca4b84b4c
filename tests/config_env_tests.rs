//! Environment overrides for configuration loading
//!
//! 环境变量是进程级状态，这里只放一个测试函数，按顺序执行各场景

use std::env;

use edunjema::config::StaticConfig;
use tempfile::TempDir;

const VARS: [&str; 4] = [
    "EDU__SERVER__PORT",
    "EDU__GENERATION__MODEL",
    "EDU__GENERATION__API_KEY",
    "OPENAI_API_KEY",
];

fn clear_vars() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_env_overrides_and_api_key_fallback() {
    clear_vars();

    // EDU__* 覆盖默认值
    unsafe {
        env::set_var("EDU__SERVER__PORT", "9000");
        env::set_var("EDU__GENERATION__MODEL", "gpt-4o-mini");
    }
    let config = StaticConfig::load_from(None).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.generation.model, "gpt-4o-mini");
    assert_eq!(config.routes.api_prefix, "/api");
    assert!(config.generation.api_key.is_empty());

    // EDU__* 同样覆盖配置文件中的值
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edunjema.toml");
    std::fs::write(&path, "[server]\nport = 9100\nhost = \"0.0.0.0\"\n").unwrap();
    let config = StaticConfig::load_from(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");

    // api_key 为空时回退到 OPENAI_API_KEY
    unsafe { env::set_var("OPENAI_API_KEY", "sk-fallback") };
    let config = StaticConfig::load_from(None).unwrap();
    assert_eq!(config.generation.api_key, "sk-fallback");

    // 显式配置的 api_key 优先
    unsafe { env::set_var("EDU__GENERATION__API_KEY", "sk-explicit") };
    let config = StaticConfig::load_from(None).unwrap();
    assert_eq!(config.generation.api_key, "sk-explicit");

    clear_vars();
    let config = StaticConfig::load_from(None).unwrap();
    assert_eq!(config.server.port, 8080);
    assert!(config.generation.api_key.is_empty());
}
