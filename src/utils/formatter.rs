// Formatters - 항목 크기, 날짜, 이름 표시 포맷팅

use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// 수정 시각을 "YYYY-MM-DD HH:MM" 형식으로 포맷팅
///
/// 시각 정보가 없는 항목(원격 소스 등)은 "-"를 반환합니다.
pub fn format_date(time: Option<SystemTime>) -> String {
    match time {
        Some(time) => {
            let datetime: DateTime<Local> = time.into();
            datetime.format("%Y-%m-%d %H:%M").to_string()
        }
        None => "-".to_string(),
    }
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 이름을 최대 표시 너비로 잘라냄 (확장자 보존)
///
/// "very_long_fi...txt" 처럼 확장자를 남기고 중간을 생략합니다.
/// 확장자가 없거나 숨김 파일(.bashrc)이면 끝에서 자릅니다.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let ellipsis = "...";
    let ellipsis_width = 3;

    let (stem, ext) = match name.rfind('.') {
        Some(dot_pos) if dot_pos > 0 => (&name[..dot_pos], &name[dot_pos..]),
        _ => (name, ""),
    };
    let ext_width = ext.width();

    if ext.is_empty() || ellipsis_width + ext_width >= max_width {
        let mut truncated = String::new();
        let mut current_width = 0;
        for ch in name.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width + ellipsis_width > max_width {
                break;
            }
            truncated.push(ch);
            current_width += ch_width;
        }
        truncated.push_str(ellipsis);
        return truncated;
    }

    let available_stem_width = max_width - ellipsis_width - ext_width;
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in stem.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if current_width + ch_width > available_stem_width {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }
    truncated.push_str(ellipsis);
    truncated.push_str(ext);
    truncated
}

/// 패널 제목용 경로 표시
///
/// 홈 디렉토리는 `~`로 줄이고, 너비를 넘으면 앞쪽을 `...`로 생략합니다.
pub fn display_path(path: &Path, max_width: usize) -> String {
    let home = dirs::home_dir();
    let text = match home.as_deref().and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    };

    if text.width() <= max_width {
        return text;
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width - 3 {
            break;
        }
        tail.push(ch);
        width += ch_width;
    }
    tail.reverse();
    format!("...{}", tail.into_iter().collect::<String>())
}
