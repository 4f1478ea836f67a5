//! 파일 로거 설정
//!
//! TUI 화면을 건드리지 않도록 로그는 파일로만 씁니다.
//! 레벨은 `RUST_LOG`가 있으면 그것을, 없으면 기본 설정을 따릅니다.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

const DEFAULT_LEVEL: &str = "info";

// 시끄러운 외부 모듈은 낮춰 둔다
const MODULE_LEVELS: &[(&str, &str)] = &[("mio::poll", "error"), ("crossterm", "warn")];

const KEEP_LOG_FILES: usize = 5;

/// 로그 디렉토리 (`<data_local_dir>/fsbrowse/logs`)
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("fsbrowse")
        .join("logs")
}

/// 기본 로그 스펙 문자열
fn default_spec() -> String {
    let mut spec = DEFAULT_LEVEL.to_string();
    for (module, level) in MODULE_LEVELS {
        spec.push_str(&format!(", {}={}", module, level));
    }
    spec
}

/// 로거 시작. 반환된 핸들이 살아 있는 동안 기록됩니다.
pub fn logger_setup() -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_spec())?
        .log_to_file(FileSpec::default().directory(log_dir()).basename("fsbrowse"))
        .format_for_files(flexi_logger::detailed_format)
        .rotate(
            Criterion::Size(1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .start()?;
    Ok(handle)
}
