use super::App;
use crate::core::actions::Action;
use log::debug;

impl App {
    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        debug!("action {}", action.id());
        match action {
            Action::Quit => self.quit(),
            Action::ToggleView => self.toggle_view(),
            Action::ToggleBrowseMode => self.toggle_browse_mode(),
            Action::GoToParent => self.go_to_parent(),
            Action::Reload => self.reload(),
            Action::CycleTheme => self.cycle_theme(),
            Action::Logout => self.logout(),
        }
    }

    /// 보기 형식 전환 후 다시 그림
    pub fn toggle_view(&mut self) {
        let view_type = self.pane.view_type().toggled();
        self.pane.set_view_type(view_type);
        self.pane.refresh();
        self.set_status_message(format!("View: {}", view_type.label()));
    }

    pub fn toggle_browse_mode(&mut self) {
        let mode = self.pane.browse_mode().toggled();
        self.pane.set_browse_mode(mode);
        self.set_status_message(format!("Mode: {}", mode.label()));
    }

    /// 상위 디렉토리로 이동
    pub fn go_to_parent(&mut self) {
        let Some(parent) = self
            .pane
            .current_path()
            .and_then(|path| path.parent())
            .map(|parent| parent.to_path_buf())
        else {
            return;
        };
        if let Some(model) = self.pane.model_mut() {
            model.set_path(&parent);
        }
    }

    /// 모델 다시 읽기
    pub fn reload(&mut self) {
        if let Some(model) = self.pane.model_mut() {
            model.refresh();
        }
    }

    /// 로그아웃. 로그인이 필요 없는 모델이면 아무 일도 없음
    pub fn logout(&mut self) {
        let Some(model) = self.pane.model_mut() else {
            return;
        };
        if !model.requires_authentication() || !model.is_authenticated() {
            return;
        }
        model.logout();
        self.set_status_message("Logged out");
    }

    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let message = format!("Theme: {}", self.theme_manager.current_name());
        self.set_status_message(message);
    }
}
