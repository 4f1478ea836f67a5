//! 액션 레지스트리
//!
//! 패널이 처리하지 않은 키를 앱 수준 액션으로 바꿉니다.
//! 상태 줄의 단축키 안내도 이 표를 기준으로 합니다.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 앱 수준 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 아이콘/목록 보기 전환
    ToggleView,
    /// 파일 열기/폴더 열기 모드 전환
    ToggleBrowseMode,
    GoToParent,
    Reload,
    CycleTheme,
    /// 로그인이 필요한 소스에서 다시 로그인 화면으로
    Logout,
    Quit,
}

impl Action {
    /// 로그에 쓰는 식별자
    pub fn id(self) -> &'static str {
        match self {
            Action::ToggleView => "toggle_view",
            Action::ToggleBrowseMode => "toggle_browse_mode",
            Action::GoToParent => "go_parent",
            Action::Reload => "reload",
            Action::CycleTheme => "cycle_theme",
            Action::Logout => "logout",
            Action::Quit => "quit",
        }
    }
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

fn kb(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    let none = Some(KeyModifiers::NONE);
    vec![
        kb(KeyCode::Char('v'), none, Action::ToggleView),
        kb(KeyCode::Char('m'), none, Action::ToggleBrowseMode),
        kb(KeyCode::Backspace, None, Action::GoToParent),
        kb(KeyCode::Left, None, Action::GoToParent),
        kb(KeyCode::Char('h'), none, Action::GoToParent),
        kb(KeyCode::Char('r'), none, Action::Reload),
        kb(KeyCode::Char('r'), Some(KeyModifiers::CONTROL), Action::Reload),
        kb(KeyCode::Char('t'), none, Action::CycleTheme),
        kb(KeyCode::Char('L'), None, Action::Logout),
        kb(KeyCode::Char('q'), none, Action::Quit),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && binding
                    .modifiers
                    .map_or(true, |required| modifiers == required)
        })
        .map(|binding| binding.action)
}
