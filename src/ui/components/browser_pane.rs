//! 브라우저 패널
//!
//! 모델의 항목 목록을 상호 배타적으로 선택 가능한 행으로 그리고,
//! 행 상호작용을 모델 이동(폴더) 또는 소유자 알림(열기/선택)으로 바꿉니다.
//!
//! 모델 알림은 `bind` 시 만든 구독 채널로 들어오며 `pump`가 처리합니다.
//! 모든 처리는 UI 스레드에서 순서대로 일어납니다.

use crate::models::{BrowseMode, EntryKind, LayoutDensity, SelectionGroup, ViewType};
use crate::system::{FsbModel, ModelEvent, Notifier};
use crate::ui::components::entry_row::{EntryRow, RowSignal};
use crate::ui::components::login_prompt::LoginPrompt;
use crate::ui::components::scroll_region::ScrollRegion;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

#[cfg(test)]
mod tests;

/// 패널이 소유자에게 보내는 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneEvent {
    /// 폴더가 아닌 항목이 선택됨
    EntrySelected(PathBuf),
    /// 항목이 열림
    EntryOpened(PathBuf),
}

/// 브라우저 패널
pub struct BrowserPane {
    browse_mode: BrowseMode,
    view_type: ViewType,
    model: Option<Box<dyn FsbModel>>,
    model_events: Option<Receiver<ModelEvent>>,
    /// 현재 행 (refresh마다 새로 생성)
    rows: Vec<EntryRow>,
    group: SelectionGroup,
    density: LayoutDensity,
    scroll: ScrollRegion,
    login: LoginPrompt,
    /// 표시 중인 모달 경고
    warning: Option<String>,
    notifier: Notifier<PaneEvent>,
}

impl BrowserPane {
    /// 기본 상태로 생성 (OpenFile, Icon, 로그인 프롬프트 숨김)
    pub fn new() -> Self {
        Self {
            browse_mode: BrowseMode::OpenFile,
            view_type: ViewType::Icon,
            model: None,
            model_events: None,
            rows: Vec::new(),
            group: SelectionGroup::new(),
            density: LayoutDensity::for_view(ViewType::Icon),
            scroll: ScrollRegion::new(),
            login: LoginPrompt::new(),
            warning: None,
            notifier: Notifier::new(),
        }
    }

    /// 데이터 모델 연결
    ///
    /// 모델을 다시 읽은 뒤 알림을 구독하고 바로 화면을 갱신합니다.
    /// 첫 읽기의 알림은 받지 않습니다.
    pub fn bind(&mut self, mut model: Box<dyn FsbModel>) {
        model.refresh();
        self.model_events = Some(model.subscribe());
        self.model = Some(model);
        self.refresh();
    }

    pub fn set_browse_mode(&mut self, mode: BrowseMode) {
        self.browse_mode = mode;
    }

    pub fn browse_mode(&self) -> BrowseMode {
        self.browse_mode
    }

    pub fn set_view_type(&mut self, view_type: ViewType) {
        self.view_type = view_type;
    }

    pub fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// 소유자 알림 구독
    pub fn subscribe(&mut self) -> Receiver<PaneEvent> {
        self.notifier.subscribe()
    }

    pub fn model(&self) -> Option<&dyn FsbModel> {
        self.model.as_deref()
    }

    pub fn model_mut(&mut self) -> Option<&mut (dyn FsbModel + 'static)> {
        self.model.as_deref_mut()
    }

    /// 모델의 현재 위치
    pub fn current_path(&self) -> Option<&Path> {
        self.model.as_ref().map(|model| model.current_path())
    }

    pub fn rows(&self) -> &[EntryRow] {
        &self.rows
    }

    pub fn density(&self) -> LayoutDensity {
        self.density
    }

    pub fn scroll(&self) -> &ScrollRegion {
        &self.scroll
    }

    pub fn login_prompt(&self) -> &LoginPrompt {
        &self.login
    }

    pub fn is_login_visible(&self) -> bool {
        self.login.is_visible()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// 현재 선택된 행 인덱스
    #[cfg(test)]
    pub fn selected_index(&self) -> Option<usize> {
        self.group.checked()
    }

    pub fn is_checked(&self, id: usize) -> bool {
        self.group.is_checked(id)
    }

    /// 화면 갱신
    ///
    /// 기존 행은 항상 모두 버립니다. 인증이 필요한데 아직이면
    /// 로그인 프롬프트만 표시하고, 그 외에는 모델 순서대로 다시 만듭니다.
    pub fn refresh(&mut self) {
        let Some(model) = self.model.as_ref() else {
            return;
        };

        self.rows.clear();
        self.group.clear();
        self.scroll.reset();

        if model.requires_authentication() && !model.is_authenticated() {
            self.login.show();
            return;
        }

        self.login.hide();
        self.density = LayoutDensity::for_view(self.view_type);
        let compact = self.density.compact;

        for (id, entry) in model.entries().iter().enumerate() {
            let mut row = EntryRow::new(id, entry.clone());
            row.set_compact(compact);
            self.group.register(id);
            self.rows.push(row);
        }
        debug_assert_eq!(self.group.len(), self.rows.len());

        debug!(
            "refreshed {} rows ({:?} view)",
            self.rows.len(),
            self.view_type
        );
    }

    /// 대기 중인 모델 알림 처리
    pub fn pump(&mut self) {
        let events: Vec<ModelEvent> = match self.model_events.as_ref() {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.handle_model_event(event);
        }
    }

    fn handle_model_event(&mut self, event: ModelEvent) {
        match event {
            ModelEvent::EntriesChanged | ModelEvent::AuthenticationSuccess => self.refresh(),
            ModelEvent::AuthenticationFail(message) => self.authentication_failed(message),
        }
    }

    /// 로그인 제출: 자격 증명을 그대로 모델에 전달
    pub fn login_requested(&mut self, username: &str, password: &str) {
        if let Some(model) = self.model.as_mut() {
            info!("login requested for {}", username);
            model.authenticate(username, password);
        }
    }

    /// 인증 실패 메시지를 모달 경고로 표시
    pub fn authentication_failed(&mut self, message: String) {
        self.warning = Some(message);
    }

    /// 모달 경고 닫기
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// 행 선택 시그널 처리
    fn entry_selected_handler(&mut self, signal: &RowSignal) {
        if signal.kind != EntryKind::Folder {
            self.notifier
                .emit(PaneEvent::EntrySelected(signal.path.clone()));
        }
    }

    /// 행 열기 시그널 처리
    fn entry_opened_handler(&mut self, signal: &RowSignal) {
        if self.browse_mode == BrowseMode::OpenFolder {
            self.notifier.emit(PaneEvent::EntryOpened(signal.path.clone()));
            return;
        }

        if signal.kind == EntryKind::Folder {
            if let Some(model) = self.model.as_mut() {
                model.set_path(&signal.path);
            }
        } else {
            self.notifier.emit(PaneEvent::EntryOpened(signal.path.clone()));
        }
    }

    /// 행 선택 (선택 그룹 갱신 + 선택 시그널)
    pub fn select_row(&mut self, id: usize) {
        if !self.group.check(id) {
            return;
        }
        let top = self.row_top(id);
        self.scroll.ensure_visible(top, self.row_height());

        let signal = self.rows[id].signal();
        self.entry_selected_handler(&signal);
    }

    /// 행 열기
    pub fn activate_row(&mut self, id: usize) {
        let Some(row) = self.rows.get(id) else {
            return;
        };
        let signal = row.signal();
        self.entry_opened_handler(&signal);
    }

    /// 선택된 행 열기 (선택이 없으면 첫 행 선택)
    pub fn activate_selected(&mut self) {
        match self.group.checked() {
            Some(id) => self.activate_row(id),
            None if !self.rows.is_empty() => self.select_row(0),
            None => {}
        }
    }

    /// 선택을 delta만큼 이동
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let target = match self.group.checked() {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        };
        if self.group.checked() != Some(target) {
            self.select_row(target);
        }
    }

    /// 스크롤 영역 높이 설정 (렌더 전 소유자가 호출)
    pub fn set_viewport_height(&mut self, lines: usize) {
        self.scroll.set_viewport(lines);
        self.scroll.clamp(self.content_height());
    }

    /// 행 높이. 한 번의 refresh로 만든 행은 모두 같습니다.
    pub fn row_height(&self) -> usize {
        self.rows.first().map(|row| row.height() as usize).unwrap_or(1)
    }

    /// 한 행이 차지하는 줄 수 (간격 포함)
    fn row_stride(&self) -> usize {
        self.row_height() + self.density.gap_lines() as usize
    }

    /// 행의 시작 줄 (여백 제외)
    pub fn row_top(&self, id: usize) -> usize {
        id.min(self.rows.len()) * self.row_stride()
    }

    /// 전체 행 높이
    pub fn content_height(&self) -> usize {
        let gap = self.density.gap_lines() as usize;
        self.rows.len() * self.row_height() + gap * self.rows.len().saturating_sub(1)
    }

    /// 스크롤 위치에서 처음으로 온전히 보이는 행
    pub fn first_visible_row(&self) -> usize {
        self.scroll.offset().div_ceil(self.row_stride())
    }

    fn page_size(&self) -> isize {
        (self.scroll.viewport() / self.row_stride()).max(1) as isize
    }

    /// 키 입력 처리. 패널이 소비했으면 true.
    ///
    /// 경고가 떠 있는 동안에는 닫기 키 외의 모든 입력을 삼킵니다.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.warning.is_some() {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
            ) {
                self.dismiss_warning();
            }
            return true;
        }

        if self.login.is_visible() {
            if let Some(request) = self.login.handle_key(key) {
                self.login_requested(&request.username, &request.password);
            }
            return true;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.move_selection(-1);
            }
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                self.move_selection(1);
            }
            (_, KeyCode::PageUp) => self.move_selection(-self.page_size()),
            (_, KeyCode::PageDown) => self.move_selection(self.page_size()),
            (_, KeyCode::Home) => {
                if !self.rows.is_empty() {
                    self.select_row(0);
                }
            }
            (_, KeyCode::End) => {
                if !self.rows.is_empty() {
                    self.select_row(self.rows.len() - 1);
                }
            }
            (_, KeyCode::Enter) | (_, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.activate_selected();
            }
            _ => return false,
        }
        true
    }
}

impl Default for BrowserPane {
    fn default() -> Self {
        Self::new()
    }
}
