use crate::models::{EntryKind, FsEntry};
use crate::system::model::{FsbModel, ModelEvent, Notifier};
use crate::utils::error::{FsBrowseError, Result};
use crate::utils::formatter::{format_date, format_file_size};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// 로컬 파일 시스템 모델
///
/// 현재 디렉토리의 항목을 폴더 먼저, 이름순(대소문자 무시)으로 보고합니다.
/// 인증이 필요 없는 소스입니다.
#[derive(Debug)]
pub struct LocalFsModel {
    /// 현재 디렉토리
    current_path: PathBuf,
    /// 마지막으로 읽은 항목
    entries: Vec<FsEntry>,
    /// 숨김 항목 표시 여부
    show_hidden: bool,
    /// 허용 확장자 (소문자, 비어 있으면 전체)
    extensions: Vec<String>,
    notifier: Notifier<ModelEvent>,
}

impl LocalFsModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            current_path: path.into(),
            entries: Vec::new(),
            show_hidden: false,
            extensions: Vec::new(),
            notifier: Notifier::new(),
        }
    }

    /// 숨김 항목 표시 설정
    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// 파일 확장자 필터 설정 (폴더는 항상 표시)
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// 디렉토리 읽기
    pub fn read_directory(&self, path: &Path) -> Result<Vec<FsEntry>> {
        if !path.exists() {
            return Err(FsBrowseError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(FsBrowseError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let mut folders = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(path)? {
            // 읽을 수 없는 항목은 건너뜀
            let Ok(entry) = entry else { continue };
            let entry_path = entry.path();

            if !self.show_hidden && is_hidden(&entry_path) {
                continue;
            }

            // 심볼릭 링크는 대상 기준으로 판단
            let Ok(metadata) = fs::metadata(&entry_path) else {
                continue;
            };

            if metadata.is_dir() {
                folders.push(FsEntry::new(entry_path, EntryKind::Folder).with_description("Folder"));
                continue;
            }

            let mut file = FsEntry::new(entry_path, EntryKind::File).with_size(metadata.len());
            if !self.accepts(&file) {
                continue;
            }
            if let Ok(modified) = metadata.modified() {
                file = file.with_modified(modified);
            }
            file.description = format!(
                "{}  {}",
                format_file_size(file.size),
                format_date(file.modified)
            );
            files.push(file);
        }

        sort_by_name(&mut folders);
        sort_by_name(&mut files);
        folders.extend(files);
        Ok(folders)
    }

    fn accepts(&self, file: &FsEntry) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        file.extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

impl FsbModel for LocalFsModel {
    fn refresh(&mut self) {
        self.entries = match self.read_directory(&self.current_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to read {}: {}", self.current_path.display(), e);
                Vec::new()
            }
        };
        debug!(
            "read {} entries from {}",
            self.entries.len(),
            self.current_path.display()
        );
        self.notifier.emit(ModelEvent::EntriesChanged);
    }

    fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    fn authenticate(&mut self, _username: &str, _password: &str) {
        debug!("local file system does not authenticate");
    }

    fn set_path(&mut self, path: &Path) {
        self.current_path = path.to_path_buf();
        self.refresh();
    }

    fn current_path(&self) -> &Path {
        &self.current_path
    }

    fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.notifier.subscribe()
    }
}

fn sort_by_name(entries: &mut [FsEntry]) {
    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// 숨김 항목 판단
fn is_hidden(path: &Path) -> bool {
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };

    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        if let Ok(metadata) = path.metadata() {
            const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
            if metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0 {
                return true;
            }
        }
    }

    file_name.starts_with('.')
}
