#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "SA_CLI_CONFIG_DIR";
pub const GO_BIN_ENV: &str = "SAC_GO_BIN";
pub const MAKE_BIN_ENV: &str = "SAC_MAKE_BIN";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// 外部工具的執行檔名稱或路徑
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    pub go: String,
    pub make: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            go: "go".to_string(),
            make: "make".to_string(),
        }
    }
}

impl Toolchain {
    pub fn with_overrides(mut self, go: Option<String>, make: Option<String>) -> Self {
        if let Some(go) = go.filter(|g| !g.is_empty()) {
            self.go = go;
        }
        if let Some(make) = make.filter(|m| !m.is_empty()) {
            self.make = make;
        }
        self
    }
}

/// `config.toml` 的內容，所有欄位皆為選填
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub debug: Option<bool>,
    pub verbose: Option<bool>,
    pub log_format: Option<String>,
    pub toolchain: Option<ToolchainConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolchainConfig {
    pub go: Option<String>,
    pub make: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置；檔案不存在時回傳預設值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::filesystem("read", path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScaffoldError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOROOT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScaffoldError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

/// Built once in `main` and passed down; nothing reads flags from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub verbose: bool,
    pub log_format: String,
    pub toolchain: Toolchain,
    pub config_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            log_format: "text".to_string(),
            toolchain: Toolchain::default(),
            config_dir: PathBuf::from(".sa-cli"),
        }
    }
}

impl Settings {
    /// 依序套用：設定檔 → 環境變數 → 命令列旗標
    pub fn load(debug: bool, verbose: bool) -> Result<Self> {
        let config_dir = config_dir();
        let file_config = FileConfig::from_file(config_dir.join(CONFIG_FILE_NAME))?;
        let settings = Self::from_parts(
            config_dir,
            file_config,
            std::env::var(GO_BIN_ENV).ok(),
            std::env::var(MAKE_BIN_ENV).ok(),
            debug,
            verbose,
        );
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_parts(
        config_dir: PathBuf,
        file_config: FileConfig,
        go_override: Option<String>,
        make_override: Option<String>,
        debug: bool,
        verbose: bool,
    ) -> Self {
        let file_toolchain = file_config.toolchain.unwrap_or_default();
        let toolchain = Toolchain::default()
            .with_overrides(file_toolchain.go, file_toolchain.make)
            .with_overrides(go_override, make_override);

        Self {
            debug: debug || file_config.debug.unwrap_or(false),
            verbose: verbose || file_config.verbose.unwrap_or(false),
            log_format: file_config.log_format.unwrap_or_else(|| "text".to_string()),
            toolchain,
            config_dir,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("toolchain.go", &self.toolchain.go)?;
        validate_non_empty_string("toolchain.make", &self.toolchain.make)?;
        validate_one_of("log_format", &self.log_format, &LOG_FORMATS)
    }
}

/// `SA_CLI_CONFIG_DIR`，否則為 `~/.sa-cli`
pub fn config_dir() -> PathBuf {
    resolve_config_dir(std::env::var(CONFIG_DIR_ENV).ok())
}

pub fn resolve_config_dir(override_dir: Option<String>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let home = directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_default();
    home.join(".sa-cli")
}
