use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::algorithm::{SearchMode, SolveOptions};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub solver: SolverConfig,
}

/// HTTP 服务配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求的超时时间（秒）
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 为 false 时输出到 stderr
    pub to_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "pathtrace".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
            to_file: true,
        }
    }
}

/// 求解器配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub search_mode: SearchMode,
    pub distance_snapshots: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Exhaustive,
            distance_snapshots: true,
        }
    }
}

impl From<&SolverConfig> for SolveOptions {
    fn from(config: &SolverConfig) -> Self {
        SolveOptions {
            search_mode: config.search_mode,
            distance_snapshots: config.distance_snapshots,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 读取配置文件，失败时回退到默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions::from(&self.solver)
    }
}
