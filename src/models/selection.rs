use std::collections::HashSet;

/// 상호 배타 선택 그룹
///
/// 등록된 id 중 최대 하나만 선택(checked) 상태가 됩니다.
/// id는 그룹 내부 식별용이며 밖으로 노출되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct SelectionGroup {
    ids: HashSet<usize>,
    checked: Option<usize>,
}

impl SelectionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// 그룹에 id 등록
    pub fn register(&mut self, id: usize) {
        self.ids.insert(id);
    }

    /// 모든 멤버 제거 (선택도 해제)
    pub fn clear(&mut self) {
        self.ids.clear();
        self.checked = None;
    }

    /// id 선택. 이전 선택은 해제됩니다. 미등록 id면 false.
    pub fn check(&mut self, id: usize) -> bool {
        if !self.ids.contains(&id) {
            return false;
        }
        self.checked = Some(id);
        true
    }

    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    pub fn is_checked(&self, id: usize) -> bool {
        self.checked == Some(id)
    }

    /// 등록된 멤버 수
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
