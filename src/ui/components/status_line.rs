// Status line component - 상태 줄 컴포넌트
//
// 폴더/파일 개수, 탐색 모드와 보기 형식, 최근 메시지와 단축키 안내를 표시합니다.

use crate::models::{BrowseMode, ViewType};
use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "v:view m:mode ⌫:up r:reload t:theme L:logout q:quit";

/// 상태 줄 위젯
pub struct StatusLine<'a> {
    folder_count: usize,
    file_count: usize,
    browse_mode: BrowseMode,
    view_type: ViewType,
    /// 최근 메시지 (선택된 항목 등)
    message: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    message_color: Color,
    hint_color: Color,
}

impl Default for StatusLine<'_> {
    fn default() -> Self {
        Self {
            folder_count: 0,
            file_count: 0,
            browse_mode: BrowseMode::default(),
            view_type: ViewType::default(),
            message: None,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            message_color: Color::Yellow,
            hint_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> StatusLine<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 폴더/파일 개수 설정
    pub fn counts(mut self, folders: usize, files: usize) -> Self {
        self.folder_count = folders;
        self.file_count = files;
        self
    }

    pub fn browse_mode(mut self, mode: BrowseMode) -> Self {
        self.browse_mode = mode;
        self
    }

    pub fn view_type(mut self, view_type: ViewType) -> Self {
        self.view_type = view_type;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.message_color = theme.warning.to_color();
        self.hint_color = theme.description.to_color();
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(
            " {}, {} | {} | {}",
            pluralize(self.folder_count, "folder", "folders"),
            pluralize(self.file_count, "file", "files"),
            self.browse_mode.label(),
            self.view_type.label(),
        );
        let message = self
            .message
            .map(|message| format!(" | {}", message))
            .unwrap_or_default();
        let hints = format!("{} ", KEY_HINTS);

        let used = left_info.width() + message.width() + hints.width();
        let mut spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(message, Style::default().fg(self.message_color)),
        ];
        // 공간이 부족하면 안내 생략
        if used <= area.width as usize {
            let padding = area.width as usize - used;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(hints, Style::default().fg(self.hint_color)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .filter_map(|x| buf.cell((x, area.y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_counts_and_labels() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);

        StatusLine::new()
            .counts(1, 3)
            .browse_mode(BrowseMode::OpenFolder)
            .view_type(ViewType::List)
            .render(area, &mut buf);

        let text = line_text(&buf);
        assert!(text.contains("1 folder, 3 files"));
        assert!(text.contains(BrowseMode::OpenFolder.label()));
        assert!(text.contains(ViewType::List.label()));
        assert!(text.contains("q:quit"));
    }

    #[test]
    fn test_message_shown_and_hints_dropped_when_narrow() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);

        StatusLine::new()
            .message(Some("data.csv"))
            .render(area, &mut buf);

        let text = line_text(&buf);
        assert!(text.contains("0 folders"));
        assert!(!text.contains("q:quit"));
    }
}
