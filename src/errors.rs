use std::fmt;

#[derive(Debug, Clone)]
pub enum EdunjemaError {
    Config(String),
    Validation(String),
    Generation(String),
    EmptyCompletion(String),
    Serialization(String),
    FileOperation(String),
}

impl EdunjemaError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            EdunjemaError::Config(_) => "E001",
            EdunjemaError::Validation(_) => "E002",
            EdunjemaError::Generation(_) => "E003",
            EdunjemaError::EmptyCompletion(_) => "E004",
            EdunjemaError::Serialization(_) => "E005",
            EdunjemaError::FileOperation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            EdunjemaError::Config(_) => "Configuration Error",
            EdunjemaError::Validation(_) => "Validation Error",
            EdunjemaError::Generation(_) => "Generation Provider Error",
            EdunjemaError::EmptyCompletion(_) => "Empty Completion",
            EdunjemaError::Serialization(_) => "Serialization Error",
            EdunjemaError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            EdunjemaError::Config(msg) => msg,
            EdunjemaError::Validation(msg) => msg,
            EdunjemaError::Generation(msg) => msg,
            EdunjemaError::EmptyCompletion(msg) => msg,
            EdunjemaError::Serialization(msg) => msg,
            EdunjemaError::FileOperation(msg) => msg,
        }
    }

    /// 是否属于客户端输入错误（HTTP 400）
    pub fn is_client_error(&self) -> bool {
        matches!(self, EdunjemaError::Validation(_))
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EdunjemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EdunjemaError {}

// 便捷的构造函数
impl EdunjemaError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::Validation(msg.into())
    }

    pub fn generation<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::Generation(msg.into())
    }

    pub fn empty_completion<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::EmptyCompletion(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        EdunjemaError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for EdunjemaError {
    fn from(err: std::io::Error) -> Self {
        EdunjemaError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EdunjemaError {
    fn from(err: serde_json::Error) -> Self {
        EdunjemaError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for EdunjemaError {
    fn from(err: config::ConfigError) -> Self {
        EdunjemaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EdunjemaError {
    fn from(err: toml::ser::Error) -> Self {
        EdunjemaError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EdunjemaError>;
