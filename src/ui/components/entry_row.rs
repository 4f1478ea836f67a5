// Entry row component - 항목 행 컴포넌트
//
// 패널 안에서 항목 하나를 나타내는 행. refresh마다 새로 만들어지며
// 자신이 표시하는 항목을 직접 들고 있습니다.

use crate::models::{EntryKind, FsEntry};
use crate::ui::Theme;
use crate::utils::formatter::{format_date, format_file_size, truncate_name};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// 이모지 아이콘 (기본)
    #[default]
    Emoji,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

/// 행 상호작용 시 패널로 전달되는 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSignal {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// 항목 행
#[derive(Debug, Clone)]
pub struct EntryRow {
    /// 선택 그룹 내 id
    id: usize,
    /// 표시하는 항목
    entry: FsEntry,
    /// 한 줄 렌더링 여부
    compact: bool,
}

impl EntryRow {
    pub fn new(id: usize, entry: FsEntry) -> Self {
        Self {
            id,
            entry,
            compact: false,
        }
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn entry(&self) -> &FsEntry {
        &self.entry
    }

    pub fn path(&self) -> &Path {
        &self.entry.path
    }

    pub fn entry_type(&self) -> EntryKind {
        self.entry.kind
    }

    /// 행 높이 (줄)
    pub fn height(&self) -> u16 {
        if self.compact {
            1
        } else {
            2
        }
    }

    /// 선택/열기 시그널 값
    pub fn signal(&self) -> RowSignal {
        RowSignal {
            path: self.entry.path.clone(),
            kind: self.entry.kind,
        }
    }
}

/// 항목 행 위젯
pub struct EntryRowView<'a> {
    row: &'a EntryRow,
    checked: bool,
    icon_mode: IconMode,
    normal_color: Color,
    selected_color: Color,
    selected_bg_color: Color,
    directory_color: Color,
    description_color: Color,
}

impl<'a> EntryRowView<'a> {
    pub fn new(row: &'a EntryRow) -> Self {
        Self {
            row,
            checked: false,
            icon_mode: IconMode::default(),
            normal_color: Color::Rgb(212, 212, 212),
            selected_color: Color::Rgb(255, 255, 255),
            selected_bg_color: Color::Rgb(0, 120, 212),
            directory_color: Color::Rgb(86, 156, 214),
            description_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 선택 상태 설정
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.normal_color = theme.file_normal.to_color();
        self.selected_color = theme.file_selected.to_color();
        self.selected_bg_color = theme.file_selected_bg.to_color();
        self.directory_color = theme.directory.to_color();
        self.description_color = theme.description.to_color();
        self
    }

    fn icon(&self) -> &'static str {
        match (self.icon_mode, self.row.entry_type()) {
            (IconMode::Emoji, EntryKind::Folder) => "📁",
            (IconMode::Emoji, EntryKind::File) => "📄",
            (IconMode::Ascii, EntryKind::Folder) => "/",
            (IconMode::Ascii, EntryKind::File) => " ",
        }
    }

    fn base_style(&self) -> Style {
        if self.checked {
            Style::default()
                .bg(self.selected_bg_color)
                .fg(self.selected_color)
        } else {
            let fg = match self.row.entry_type() {
                EntryKind::Folder => self.directory_color,
                EntryKind::File => self.normal_color,
            };
            Style::default().fg(fg)
        }
    }

    /// 목록 보기에서 오른쪽에 붙는 크기/날짜 컬럼
    fn detail_column(&self, width: usize) -> Option<String> {
        let entry = self.row.entry();
        if width < 40 || entry.is_folder() {
            return None;
        }
        Some(format!(
            "{:>10}  {}",
            format_file_size(entry.size),
            format_date(entry.modified)
        ))
    }
}

impl Widget for EntryRowView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = self.base_style();
        buf.set_style(area, style);

        let width = area.width as usize;
        let icon = self.icon();
        let prefix = format!(" {} ", icon);
        let detail = if self.row.is_compact() {
            self.detail_column(width)
        } else {
            None
        };
        let detail_width = detail.as_ref().map(|d| d.width() + 1).unwrap_or(0);
        let name_width = width
            .saturating_sub(prefix.width())
            .saturating_sub(detail_width);
        let name = truncate_name(&self.row.entry().name, name_width);

        let mut spans = vec![
            Span::styled(prefix, style),
            Span::styled(name, style.add_modifier(Modifier::BOLD)),
        ];
        if let Some(detail) = detail {
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let padding = width.saturating_sub(used + detail.width());
            spans.push(Span::styled(" ".repeat(padding), style));
            spans.push(Span::styled(detail, style));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if !self.row.is_compact() && area.height > 1 {
            let description_style = if self.checked {
                style
            } else {
                Style::default().fg(self.description_color)
            };
            let text = format!("    {}", self.row.entry().description);
            buf.set_string(
                area.x,
                area.y + 1,
                truncate_name(&text, width),
                description_style,
            );
        }
    }
}
