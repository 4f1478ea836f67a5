use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 색상 테마
///
/// 브라우저 패널과 주변 위젯의 색상을 정의합니다.
/// 미리 정의된 테마를 쓰거나 TOML 파일에서 읽어올 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 패널
    pub panel_border: ColorDef,
    pub panel_bg: ColorDef,

    // 항목 행
    pub file_normal: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub directory: ColorDef,
    pub description: ColorDef,

    // 상태 줄
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ratatui Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(value) | ColorDef::Named(value) if value.starts_with('#') => {
                parse_hex_color(value)
            }
            ColorDef::Hex(value) | ColorDef::Named(value) => parse_named_color(value),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            panel_border: "#0078d4".into(),
            panel_bg: "#1e1e1e".into(),

            file_normal: "#d4d4d4".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#0078d4".into(),
            directory: "#569cd6".into(),
            description: "#808080".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            panel_border: "#0078d4".into(),
            panel_bg: "#ffffff".into(),

            file_normal: "#1e1e1e".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            directory: "#0066cc".into(),
            description: "#6e6e6e".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),

            panel_border: "#00ff00".into(),
            panel_bg: "#000000".into(),

            file_normal: "#ffffff".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#00ff00".into(),
            directory: "#00ffff".into(),
            description: "#c0c0c0".into(),

            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

/// 테마 관리자
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// 이름으로 테마 전환
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().find(|(n, _)| n == name) {
            Some((_, theme)) => {
                self.current_theme = theme.clone();
                self.current_name = name.to_string();
                Ok(())
            }
            None => Err(format!("Theme not found: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        let current_index = self
            .available_themes
            .iter()
            .position(|(n, _)| *n == self.current_name)
            .unwrap_or(0);
        let next_index = (current_index + 1) % self.available_themes.len();
        let (name, theme) = &self.available_themes[next_index];
        self.current_name = name.clone();
        self.current_theme = theme.clone();
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 디렉토리의 *.toml 테마 파일 로드 (읽을 수 없는 파일은 건너뜀)
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<(), anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    self.available_themes.push((name, theme));
                }
                Err(e) => log::warn!("skipping theme {}: {}", path.display(), e),
            }
        }

        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_themes() {
        assert_eq!(Theme::dark().bg_primary.to_color(), Color::Rgb(30, 30, 30));
        assert_eq!(
            Theme::light().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );
        assert_eq!(Theme::high_contrast().bg_primary.to_color(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#123"), Color::Reset);
        assert_eq!(parse_named_color("Red"), Color::Red);
        assert_eq!(parse_named_color("unknown"), Color::Reset);
    }

    #[test]
    fn test_untagged_colordef_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            c: ColorDef,
        }

        // untagged enum이라 역직렬화는 항상 첫 variant(Hex)로 들어옴
        let wrapper: Wrapper = toml::from_str("c = \"blue\"").unwrap();
        assert_eq!(wrapper.c.to_color(), Color::Blue);
        let wrapper: Wrapper = toml::from_str("c = \"#000000\"").unwrap();
        assert_eq!(wrapper.c.to_color(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_theme_switching_and_cycling() {
        let mut manager = ThemeManager::new();
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert!(manager.switch_theme("nope").is_err());

        manager.cycle_theme();
        assert_eq!(manager.current_name(), "high_contrast");
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "dark");
    }

    #[test]
    fn test_load_themes_from_dir() {
        let temp = TempDir::new().unwrap();
        let content = toml::to_string_pretty(&Theme::light()).unwrap();
        fs::write(temp.path().join("paper.toml"), content).unwrap();
        fs::write(temp.path().join("broken.toml"), "not a theme").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let mut manager = ThemeManager::new();
        manager.load_themes_from_dir(temp.path()).unwrap();

        assert_eq!(manager.available_themes().len(), 4);
        assert!(manager.switch_theme("paper").is_ok());
    }
}
