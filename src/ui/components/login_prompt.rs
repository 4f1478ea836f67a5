// Login prompt component - 로그인 입력 컴포넌트
//
// 인증이 필요한 소스에서 항목 목록 대신 표시됩니다.

use crate::ui::Theme;
use crate::utils::text_edit::TextField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 입력 포커스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// 로그인 제출 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 로그인 프롬프트 상태
#[derive(Debug, Clone, Default)]
pub struct LoginPrompt {
    visible: bool,
    username: TextField,
    password: TextField,
    focus: LoginField,
}

impl LoginPrompt {
    /// 숨김 상태로 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    pub fn username(&self) -> &TextField {
        &self.username
    }

    pub fn password(&self) -> &TextField {
        &self.password
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// 키 입력 처리
    ///
    /// 비밀번호 칸에서 Enter를 누르면 제출 값을 반환하고 비밀번호 칸을 비웁니다.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LoginRequest> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (_, KeyCode::Up) | (_, KeyCode::Down) => {
                self.toggle_focus();
            }
            (_, KeyCode::Enter) => match self.focus {
                LoginField::Username => self.focus = LoginField::Password,
                LoginField::Password => {
                    let request = LoginRequest {
                        username: self.username.value().to_string(),
                        password: self.password.value().to_string(),
                    };
                    self.password.clear();
                    return Some(request);
                }
            },
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.focused_field().insert_char(c);
            }
            (_, KeyCode::Backspace) => self.focused_field().backspace(),
            (_, KeyCode::Delete) => self.focused_field().delete(),
            (_, KeyCode::Left) => self.focused_field().left(),
            (_, KeyCode::Right) => self.focused_field().right(),
            (_, KeyCode::Home) => self.focused_field().home(),
            (_, KeyCode::End) => self.focused_field().end(),
            _ => {}
        }
        None
    }
}

/// 로그인 프롬프트 위젯
pub struct LoginPromptView<'a> {
    prompt: &'a LoginPrompt,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    input_bg: Color,
    focus_color: Color,
}

impl<'a> LoginPromptView<'a> {
    pub fn new(prompt: &'a LoginPrompt) -> Self {
        Self {
            prompt,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            input_bg: Color::Rgb(30, 30, 30),
            focus_color: Color::Rgb(0, 120, 212),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.panel_border.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self.focus_color = theme.accent.to_color();
        self
    }

    /// 화면 중앙 영역 계산
    fn calculate_area(screen: Rect) -> Rect {
        let width = 44u16.min(screen.width);
        let height = 9u16.min(screen.height);
        Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        }
    }

    fn render_field(
        &self,
        buf: &mut Buffer,
        inner: Rect,
        y: u16,
        label: &str,
        text: String,
        cursor: Option<usize>,
    ) {
        let focused = cursor.is_some();
        let label_style = if focused {
            Style::default()
                .fg(self.focus_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_color)
        };
        buf.set_string(inner.x, y, label, label_style);

        let input_y = y + 1;
        for x in inner.x..inner.x + inner.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(self.input_bg);
            }
        }
        buf.set_stringn(
            inner.x,
            input_y,
            text,
            inner.width as usize,
            Style::default().fg(self.fg_color).bg(self.input_bg),
        );

        if let Some(col) = cursor.filter(|&col| col < inner.width as usize) {
            if let Some(cell) = buf.cell_mut((inner.x + col as u16, input_y)) {
                cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

impl Widget for LoginPromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = Self::calculate_area(area);
        if dialog.width < 6 || dialog.height < 6 {
            return;
        }

        Clear.render(dialog, buf);
        Block::default()
            .title(" Login ")
            .title_style(
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(dialog, buf);

        let inner = Rect {
            x: dialog.x + 2,
            y: dialog.y + 1,
            width: dialog.width.saturating_sub(4),
            height: dialog.height.saturating_sub(2),
        };

        let username = self.prompt.username();
        let password = self.prompt.password();
        let (user_cursor, pass_cursor) = match self.prompt.focus() {
            LoginField::Username => (Some(username.before_cursor().width()), None),
            LoginField::Password => (None, Some(password.chars_before_cursor())),
        };
        let masked = "*".repeat(password.value().chars().count());
        self.render_field(
            buf,
            inner,
            inner.y,
            "Username:",
            username.value().to_string(),
            user_cursor,
        );
        self.render_field(buf, inner, inner.y + 3, "Password:", masked, pass_cursor);

        if inner.height > 6 {
            buf.set_string(
                inner.x,
                inner.y + 6,
                "Enter: sign in  Tab: switch",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            );
        }
    }
}
