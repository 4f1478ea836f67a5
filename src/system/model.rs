//! 데이터 소스 모델 계약
//!
//! 브라우저 패널은 이 트레이트를 통해서만 항목 목록을 읽고,
//! 변경/인증 결과는 채널 메시지(`ModelEvent`)로 전달받습니다.

use crate::models::FsEntry;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

/// 모델이 구독자에게 보내는 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// 항목 목록이 바뀜
    EntriesChanged,
    /// 인증 성공
    AuthenticationSuccess,
    /// 인증 실패 (사용자에게 보여줄 메시지)
    AuthenticationFail(String),
}

/// 타입 있는 이벤트 브로드캐스터
///
/// 구독자마다 mpsc 송신단을 하나씩 보관합니다.
/// 수신단이 drop된 구독자는 다음 `emit`에서 정리됩니다.
#[derive(Debug)]
pub struct Notifier<E: Clone> {
    subscribers: Vec<Sender<E>>,
}

impl<E: Clone> Notifier<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// 새 구독 생성
    pub fn subscribe(&mut self) -> Receiver<E> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// 모든 구독자에게 이벤트 전송
    pub fn emit(&mut self, event: E) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// 파일 시스템/원격 데이터 소스 모델
pub trait FsbModel {
    /// 데이터 다시 읽기. 완료되면 `EntriesChanged`를 보냅니다.
    fn refresh(&mut self);

    /// 인증이 필요한 소스인지
    fn requires_authentication(&self) -> bool {
        false
    }

    /// 현재 인증된 상태인지
    fn is_authenticated(&self) -> bool {
        false
    }

    /// 현재 항목 목록 (모델의 순서 그대로)
    fn entries(&self) -> &[FsEntry];

    /// 인증 해제. 인증이 없는 소스는 아무것도 하지 않습니다.
    fn logout(&mut self) {}

    /// 인증 요청. 결과는 `AuthenticationSuccess` / `AuthenticationFail`로 전달됩니다.
    fn authenticate(&mut self, username: &str, password: &str);

    /// 현재 위치 변경. 다시 읽은 뒤 `EntriesChanged`를 보냅니다.
    fn set_path(&mut self, path: &Path);

    /// 현재 위치
    fn current_path(&self) -> &Path;

    /// 알림 구독
    fn subscribe(&mut self) -> Receiver<ModelEvent>;
}
