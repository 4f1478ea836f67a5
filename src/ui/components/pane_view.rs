// Browser pane view - 브라우저 패널 위젯
//
// 테두리와 현재 경로 제목, 그 안에 로그인 프롬프트 또는 항목 행을 그립니다.
// 경고가 떠 있으면 맨 위에 겹쳐 그립니다.

use crate::models::LayoutDensity;
use crate::ui::components::browser_pane::BrowserPane;
use crate::ui::components::entry_row::{EntryRowView, IconMode};
use crate::ui::components::login_prompt::LoginPromptView;
use crate::ui::components::warning_dialog::WarningDialog;
use crate::ui::Theme;
use crate::utils::formatter::display_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// 테두리 안쪽에서 여백을 뺀 행 영역
pub fn content_area(area: Rect, density: LayoutDensity) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let pad_x = density.padding_cols();
    let pad_y = density.padding_lines();
    Rect {
        x: inner.x + pad_x.min(inner.width / 2),
        y: inner.y + pad_y.min(inner.height / 2),
        width: inner.width.saturating_sub(pad_x * 2),
        height: inner.height.saturating_sub(pad_y * 2),
    }
}

/// 브라우저 패널 위젯
pub struct BrowserPaneView<'a> {
    pane: &'a BrowserPane,
    theme: Option<&'a Theme>,
    icon_mode: IconMode,
    border_color: Color,
    title_color: Color,
    bg_color: Color,
    empty_color: Color,
}

impl<'a> BrowserPaneView<'a> {
    pub fn new(pane: &'a BrowserPane) -> Self {
        Self {
            pane,
            theme: None,
            icon_mode: IconMode::default(),
            border_color: Color::Rgb(60, 60, 60),
            title_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Reset,
            empty_color: Color::Rgb(128, 128, 128),
        }
    }

    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    /// 테마 적용 (행, 프롬프트, 경고에도 전달)
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.border_color = theme.panel_border.to_color();
        self.title_color = theme.accent.to_color();
        self.bg_color = theme.panel_bg.to_color();
        self.empty_color = theme.description.to_color();
        self.theme = Some(theme);
        self
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let pane = self.pane;
        if pane.rows().is_empty() {
            if pane.model().is_some() && area.height > 0 {
                buf.set_stringn(
                    area.x,
                    area.y,
                    "(empty)",
                    area.width as usize,
                    Style::default()
                        .fg(self.empty_color)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            return;
        }

        let offset = pane.scroll().offset();
        let visible = area.height as usize;

        // 행 높이가 모두 같으므로 첫 행은 오프셋에서 바로 계산
        for row in pane.rows().iter().skip(pane.first_visible_row()) {
            let line = pane.row_top(row.id()) - offset;
            if line >= visible {
                break;
            }
            let height = (row.height() as usize).min(visible - line) as u16;
            let row_area = Rect {
                x: area.x,
                y: area.y + line as u16,
                width: area.width,
                height,
            };

            let mut view = EntryRowView::new(row)
                .checked(pane.is_checked(row.id()))
                .icon_mode(self.icon_mode);
            if let Some(theme) = self.theme {
                view = view.theme(theme);
            }
            view.render(row_area, buf);
        }
    }
}

impl Widget for BrowserPaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let title = match self.pane.current_path() {
            Some(path) => display_path(path, (area.width as usize).saturating_sub(4)),
            None => String::new(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.pane.is_login_visible() {
            let mut prompt = LoginPromptView::new(self.pane.login_prompt());
            if let Some(theme) = self.theme {
                prompt = prompt.theme(theme);
            }
            prompt.render(inner, buf);
        } else {
            self.render_rows(content_area(area, self.pane.density()), buf);
        }

        if let Some(message) = self.pane.warning() {
            let mut dialog = WarningDialog::new(message);
            if let Some(theme) = self.theme {
                dialog = dialog.theme(theme);
            }
            dialog.render(area, buf);
        }
    }
}
