/// 한 줄 텍스트 입력 필드 (값 + UTF-8 경계 기준 커서)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor_pos: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 커서 위치 (바이트 오프셋)
    #[cfg(test)]
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let prev = self.prev_char_start();
        self.value.remove(prev);
        self.cursor_pos = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn left(&mut self) {
        self.cursor_pos = self.prev_char_start();
    }

    pub fn right(&mut self) {
        if self.cursor_pos >= self.value.len() {
            return;
        }

        self.cursor_pos = self.value[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// 커서 앞 부분
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.cursor_pos]
    }

    /// 커서 앞까지의 문자 수 (가려진 입력의 커서 위치)
    pub fn chars_before_cursor(&self) -> usize {
        self.before_cursor().chars().count()
    }

    fn prev_char_start(&self) -> usize {
        self.value[..self.cursor_pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
