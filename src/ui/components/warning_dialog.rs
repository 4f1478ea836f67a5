// Warning dialog component - 경고 다이얼로그 컴포넌트
//
// 모달 경고 메시지. 닫힐 때까지 패널 입력을 막습니다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

const TITLE: &str = " Warning ";

/// 경고 다이얼로그 위젯
pub struct WarningDialog<'a> {
    message: &'a str,
    bg_color: Color,
    fg_color: Color,
    warning_color: Color,
    button_bg: Color,
    button_fg: Color,
}

impl<'a> WarningDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            warning_color: Color::Rgb(255, 165, 0),
            button_bg: Color::Rgb(0, 120, 212),
            button_fg: Color::White,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.warning_color = theme.warning.to_color();
        self.button_bg = theme.file_selected_bg.to_color();
        self.button_fg = theme.file_selected.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 메시지 길이 반영)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let width = 50u16.min(sw.saturating_sub(4)).max(30).min(sw);
        let text_width = width.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
        let lines: usize = self
            .message
            .lines()
            .map(|line| line.width().div_ceil(text_width).max(1))
            .sum::<usize>()
            .max(1);
        let height = (5 + lines as u16).min(sh);

        Rect {
            x: screen.x + (sw - width) / 2,
            y: screen.y + (sh - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for WarningDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = self.calculate_area(area);
        if dialog.width < 4 || dialog.height < 4 {
            return;
        }

        Clear.render(dialog, buf);

        let block = Block::default()
            .title(TITLE)
            .title_style(
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));
        block.render(dialog, buf);

        let inner = Rect {
            x: dialog.x + DIALOG_H_PADDING,
            y: dialog.y + DIALOG_V_PADDING,
            width: dialog.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: dialog.height.saturating_sub(DIALOG_V_PADDING + 3),
        };
        Paragraph::new(self.message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: false })
            .render(inner, buf);

        let label = " OK ";
        let button_y = dialog.y + dialog.height - 2;
        let button_x = dialog.x + (dialog.width.saturating_sub(label.width() as u16)) / 2;
        buf.set_string(
            button_x,
            button_y,
            label,
            Style::default().fg(self.button_fg).bg(self.button_bg),
        );
    }
}
