use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 항목 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 폴더
    Folder,
    /// 파일
    File,
}

/// 데이터 소스가 보고하는 파일/폴더 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// 전체 경로 (식별자)
    pub path: PathBuf,
    /// 표시 이름
    pub name: String,
    /// 항목 종류
    pub kind: EntryKind,
    /// 바이트 단위 크기 (폴더는 0)
    pub size: u64,
    /// 수정 시간 (알 수 없으면 None)
    pub modified: Option<SystemTime>,
    /// 부가 설명 (아이콘 보기에서 두 번째 줄에 표시)
    pub description: String,
}

impl FsEntry {
    /// 새 항목 생성
    ///
    /// 이름은 경로의 마지막 구성 요소에서 가져옵니다.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            kind,
            size: 0,
            modified: None,
            description: String::new(),
        }
    }

    /// 폴더 항목 생성
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Folder)
    }

    /// 파일 항목 생성
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 폴더 여부 확인
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// 파일 여부 확인
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// 소문자 확장자 (없으면 None)
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
