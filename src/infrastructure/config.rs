//! 配置基础设施
//!
//! 配置来自可选的 TOML 文件，所有字段都有默认值，缺省的部分按默认值补齐。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCTOS_CONFIG";
/// 覆盖监听端口的环境变量
pub const PORT_ENV: &str = "PRODUCTOS_PORT";

/// 服务配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 按 命令行参数 > 环境变量 的顺序查找配置文件，都没有时使用默认配置
    pub fn load(cli_path: Option<String>) -> Result<Self, ConfigError> {
        let path = cli_path.or_else(|| std::env::var(CONFIG_PATH_ENV).ok());
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    /// 端口覆盖值无法解析时忽略
    pub fn apply_port_override(&mut self, value: Option<&str>) {
        if let Some(port) = value.and_then(|v| v.trim().parse::<u16>().ok()) {
            self.http.port = port;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid("绑定地址不能为空".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("端口不能为 0".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("超时时间必须大于 0".to_string()));
        }
        self.logging.level()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse::<Level>()
            .map_err(|_| ConfigError::Invalid(format!("未知的日志级别: {}", self.level)))
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    FileRead(String),
    #[error("解析配置文件失败: {0}")]
    Parse(String),
    #[error("配置无效: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 9090").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            [http]
            bind_address = "0.0.0.0"
            port = 3001
            timeout_seconds = 5

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:3001");
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.logging.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::load_from_file("/nonexistent/productos.toml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("[http\nport = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.http.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.http.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.http.bind_address = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("4000"));
        assert_eq!(config.http.port, 4000);

        config.apply_port_override(Some("not-a-port"));
        assert_eq!(config.http.port, 4000);

        config.apply_port_override(None);
        assert_eq!(config.http.port, 4000);
    }
}
