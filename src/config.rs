//! 사용자 설정
//!
//! `<config_dir>/fsbrowse/config.toml`에서 읽습니다. 파일이 없으면 기본값을 씁니다.
//!
//! ```toml
//! browse_mode = "open_file"
//! view_type = "list"
//! theme = "light"
//! icon_mode = "ascii"
//! start_path = "/data"
//! show_hidden = false
//! extensions = ["csv", "txt"]
//!
//! [auth]
//! username = "analyst"
//! password = "secret"
//! ```

use crate::models::{BrowseMode, ViewType};
use crate::system::Credentials;
use crate::ui::components::IconMode;
use crate::utils::error::{FsBrowseError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub browse_mode: BrowseMode,
    pub view_type: ViewType,
    pub theme: String,
    pub icon_mode: IconMode,
    pub start_path: Option<PathBuf>,
    pub show_hidden: bool,
    /// 표시할 파일 확장자 (비어 있으면 전체)
    pub extensions: Vec<String>,
    /// 있으면 로그인 후에만 항목 표시
    pub auth: Option<Credentials>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            browse_mode: BrowseMode::default(),
            view_type: ViewType::default(),
            theme: "dark".to_string(),
            icon_mode: IconMode::default(),
            start_path: None,
            show_hidden: false,
            extensions: Vec::new(),
            auth: None,
        }
    }
}

impl AppConfig {
    /// 설정 파일 경로
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fsbrowse").join("config.toml"))
    }

    /// 사용자 테마 디렉토리
    pub fn themes_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fsbrowse").join("themes"))
    }

    /// 기본 위치에서 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 파일에서 설정 로드 (없으면 기본값)
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FsBrowseError::Config(e.message().to_string()))
    }

    /// 시작 디렉토리 결정: 인자 > 설정 > 현재 디렉토리
    pub fn resolve_start_path(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        let path = match arg.or_else(|| self.start_path.clone()) {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        if !path.exists() {
            return Err(FsBrowseError::PathNotFound { path });
        }
        if !path.is_dir() {
            return Err(FsBrowseError::NotADirectory { path });
        }
        Ok(path)
    }
}
