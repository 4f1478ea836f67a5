use serde::{Deserialize, Serialize};

/// 항목 "열기" 동작 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowseMode {
    /// 파일만 연다 (폴더는 하위로 이동)
    #[default]
    OpenFile,
    /// 폴더를 포함해 모든 항목을 연다
    OpenFolder,
}

impl BrowseMode {
    pub fn toggled(self) -> Self {
        match self {
            BrowseMode::OpenFile => BrowseMode::OpenFolder,
            BrowseMode::OpenFolder => BrowseMode::OpenFile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrowseMode::OpenFile => "OPEN FILE",
            BrowseMode::OpenFolder => "OPEN FOLDER",
        }
    }
}

/// 보기 형식 (레이아웃 밀도)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// 넓은 간격
    #[default]
    Icon,
    /// 촘촘한 목록
    List,
}

impl ViewType {
    pub fn toggled(self) -> Self {
        match self {
            ViewType::Icon => ViewType::List,
            ViewType::List => ViewType::Icon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Icon => "ICON",
            ViewType::List => "LIST",
        }
    }
}

/// 행 레이아웃 밀도
///
/// margins/spacing은 논리 단위(px)로 보관하고, 터미널 셀로의 변환은
/// `padding_cols` / `padding_lines` / `gap_lines`가 담당합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDensity {
    /// 스크롤 영역 안쪽 여백
    pub margins: u16,
    /// 행 사이 간격
    pub spacing: u16,
    /// 한 줄짜리 행 렌더링 여부
    pub compact: bool,
}

impl LayoutDensity {
    pub const LIST: LayoutDensity = LayoutDensity {
        margins: 8,
        spacing: 0,
        compact: true,
    };

    pub const SPACIOUS: LayoutDensity = LayoutDensity {
        margins: 12,
        spacing: 8,
        compact: false,
    };

    /// 보기 형식에 맞는 밀도
    pub fn for_view(view_type: ViewType) -> Self {
        match view_type {
            ViewType::List => Self::LIST,
            _ => Self::SPACIOUS,
        }
    }

    /// 좌우 여백 (셀)
    pub fn padding_cols(&self) -> u16 {
        self.margins / 4
    }

    /// 상하 여백 (줄)
    pub fn padding_lines(&self) -> u16 {
        self.margins / 8
    }

    /// 행 사이 빈 줄 수
    pub fn gap_lines(&self) -> u16 {
        self.spacing / 8
    }
}

impl Default for LayoutDensity {
    fn default() -> Self {
        Self::for_view(ViewType::default())
    }
}
