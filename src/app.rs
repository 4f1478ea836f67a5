use crate::config::AppConfig;
use crate::core::actions::find_action;
use crate::system::{CredentialGate, FsbModel, LocalFsModel};
use crate::ui::{BrowserPane, IconMode, PaneEvent, Theme, ThemeManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

mod navigation;


/// 브라우저 패널의 소유자
///
/// 패널 알림을 받아 상태 줄을 갱신하고, 항목이 열리면 종료합니다.
pub struct App {
    should_quit: bool,
    pane: BrowserPane,
    pane_events: Receiver<PaneEvent>,
    theme_manager: ThemeManager,
    icon_mode: IconMode,
    /// 상태 줄 메시지
    status_message: Option<String>,
    /// 열린 항목 (종료 시 출력)
    opened: Option<PathBuf>,
}

impl App {
    /// 설정과 시작 디렉토리로 생성
    ///
    /// `[auth]`가 설정되어 있으면 로컬 모델을 로그인 뒤에 둡니다.
    pub fn new(config: &AppConfig, start_path: PathBuf) -> Self {
        let local = LocalFsModel::new(start_path)
            .show_hidden(config.show_hidden)
            .extensions(&config.extensions);

        let model: Box<dyn FsbModel> = match &config.auth {
            Some(credentials) => {
                info!("login required for {}", credentials.username);
                Box::new(CredentialGate::new(local, credentials.clone()))
            }
            None => Box::new(local),
        };

        let mut app = Self::with_model(config, model);
        if let Some(dir) = AppConfig::themes_dir() {
            if let Err(e) = app.theme_manager.load_themes_from_dir(&dir) {
                warn!("failed to load themes from {}: {}", dir.display(), e);
            }
        }
        app.apply_theme_name(&config.theme);
        app
    }

    /// 임의의 모델로 생성
    pub fn with_model(config: &AppConfig, model: Box<dyn FsbModel>) -> Self {
        let mut pane = BrowserPane::new();
        pane.set_browse_mode(config.browse_mode);
        pane.set_view_type(config.view_type);
        let pane_events = pane.subscribe();
        pane.bind(model);

        Self {
            should_quit: false,
            pane,
            pane_events,
            theme_manager: ThemeManager::new(),
            icon_mode: config.icon_mode,
            status_message: None,
            opened: None,
        }
    }

    fn apply_theme_name(&mut self, name: &str) {
        if let Err(e) = self.theme_manager.switch_theme(name) {
            warn!("{}", e);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn pane(&self) -> &BrowserPane {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut BrowserPane {
        &mut self.pane
    }

    pub fn theme(&self) -> &Theme {
        self.theme_manager.current()
    }

    #[cfg(test)]
    pub fn theme_name(&self) -> &str {
        self.theme_manager.current_name()
    }

    pub fn icon_mode(&self) -> IconMode {
        self.icon_mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 열린 항목
    pub fn opened(&self) -> Option<&Path> {
        self.opened.as_deref()
    }

    pub fn into_opened(self) -> Option<PathBuf> {
        self.opened
    }

    /// 현재 행의 (폴더 수, 파일 수)
    pub fn counts(&self) -> (usize, usize) {
        let rows = self.pane.rows();
        let folders = rows.iter().filter(|row| row.entry().is_folder()).count();
        let files = rows.iter().filter(|row| row.entry().is_file()).count();
        (folders, files)
    }

    /// 키 입력 처리: Ctrl+C, 패널, 앱 액션 순
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        if self.pane.handle_key(key) {
            return;
        }
        if let Some(action) = find_action(key.modifiers, key.code) {
            self.execute_action(action);
        }
    }

    /// 모델 알림과 패널 알림 처리 (이벤트 루프마다 호출)
    pub fn tick(&mut self) {
        self.pane.pump();

        let events: Vec<PaneEvent> = self.pane_events.try_iter().collect();
        for event in events {
            match event {
                PaneEvent::EntrySelected(path) => {
                    self.status_message = Some(display_name(&path));
                }
                PaneEvent::EntryOpened(path) => {
                    info!("opened {}", path.display());
                    self.opened = Some(path);
                    self.quit();
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
