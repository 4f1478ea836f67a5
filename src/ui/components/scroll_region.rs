/// 세로 스크롤 영역 상태 (줄 단위)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollRegion {
    /// 첫 번째로 보이는 줄
    offset: usize,
    /// 보이는 줄 수 (마지막 렌더 기준, 0이면 아직 모름)
    viewport: usize,
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn set_viewport(&mut self, lines: usize) {
        self.viewport = lines;
    }

    /// 맨 위로
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// `[top, top + height)` 구간이 보이도록 오프셋 조정
    pub fn ensure_visible(&mut self, top: usize, height: usize) {
        if self.viewport == 0 {
            return;
        }
        if top < self.offset {
            self.offset = top;
        } else if top + height > self.offset + self.viewport {
            self.offset = (top + height).saturating_sub(self.viewport);
        }
    }

    /// 전체 내용 높이에 맞게 오프셋 제한
    pub fn clamp(&mut self, content_height: usize) {
        let max_offset = content_height.saturating_sub(self.viewport);
        self.offset = self.offset.min(max_offset);
    }
}
