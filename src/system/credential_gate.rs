use crate::models::FsEntry;
use crate::system::model::{FsbModel, ModelEvent, Notifier};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// 인증 실패 메시지
pub const AUTH_FAIL_MESSAGE: &str = "Username and/or password are not correct.";

/// 로그인 자격 증명
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// 비밀번호는 로그에 남기지 않음
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 로그인이 필요한 데이터 소스
///
/// 내부 모델을 감싸고, 인증 전에는 항목을 노출하지 않습니다.
/// 인증 결과는 호출 즉시가 아니라 구독 채널을 통해 전달됩니다.
pub struct CredentialGate<M: FsbModel> {
    inner: M,
    inner_events: Receiver<ModelEvent>,
    credentials: Credentials,
    authenticated: bool,
    notifier: Notifier<ModelEvent>,
}

impl<M: FsbModel> CredentialGate<M> {
    pub fn new(mut inner: M, credentials: Credentials) -> Self {
        let inner_events = inner.subscribe();
        Self {
            inner,
            inner_events,
            credentials,
            authenticated: false,
            notifier: Notifier::new(),
        }
    }

    /// 내부 모델 알림을 구독자에게 다시 전달
    fn forward_inner_events(&mut self) {
        while let Ok(event) = self.inner_events.try_recv() {
            self.notifier.emit(event);
        }
    }

    fn fail(&mut self, message: &str) {
        warn!("authentication failed: {}", message);
        self.notifier
            .emit(ModelEvent::AuthenticationFail(message.to_string()));
    }
}

impl<M: FsbModel> FsbModel for CredentialGate<M> {
    fn refresh(&mut self) {
        if !self.authenticated {
            debug!("refresh skipped: not authenticated");
            return;
        }
        self.inner.refresh();
        self.forward_inner_events();
    }

    fn requires_authentication(&self) -> bool {
        true
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn entries(&self) -> &[FsEntry] {
        if self.authenticated {
            self.inner.entries()
        } else {
            &[]
        }
    }

    /// 다시 로그인해야 항목이 보임
    fn logout(&mut self) {
        if self.authenticated {
            info!("logged out {}", self.credentials.username);
            self.authenticated = false;
            self.notifier.emit(ModelEvent::EntriesChanged);
        }
    }

    fn authenticate(&mut self, username: &str, password: &str) {
        if username.is_empty() {
            self.fail("Username is required.");
            return;
        }
        if password.is_empty() {
            self.fail("Password is required.");
            return;
        }
        if username != self.credentials.username || password != self.credentials.password {
            self.fail(AUTH_FAIL_MESSAGE);
            return;
        }

        info!("authenticated as {}", username);
        self.authenticated = true;
        self.notifier.emit(ModelEvent::AuthenticationSuccess);
        self.inner.refresh();
        self.forward_inner_events();
    }

    fn set_path(&mut self, path: &Path) {
        if !self.authenticated {
            debug!("set_path ignored: not authenticated");
            return;
        }
        self.inner.set_path(path);
        self.forward_inner_events();
    }

    fn current_path(&self) -> &Path {
        self.inner.current_path()
    }

    fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.notifier.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::LocalFsModel;
    use std::fs;
    use tempfile::TempDir;

    fn make_gate() -> (TempDir, CredentialGate<LocalFsModel>) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.csv"), "1,2").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        let gate = CredentialGate::new(
            LocalFsModel::new(temp.path()),
            Credentials::new("alice", "s3cret"),
        );
        (temp, gate)
    }

    fn drain(rx: &Receiver<ModelEvent>) -> Vec<ModelEvent> {
        rx.try_iter().collect()
    }

    #[test]
    fn test_hidden_until_authenticated() {
        let (_temp, mut gate) = make_gate();
        let rx = gate.subscribe();

        gate.refresh();

        assert!(gate.requires_authentication());
        assert!(!gate.is_authenticated());
        assert!(gate.entries().is_empty());
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_successful_login() {
        let (_temp, mut gate) = make_gate();
        let rx = gate.subscribe();

        gate.authenticate("alice", "s3cret");

        assert!(gate.is_authenticated());
        assert_eq!(gate.entries().len(), 2);
        assert_eq!(
            drain(&rx),
            vec![ModelEvent::AuthenticationSuccess, ModelEvent::EntriesChanged]
        );
    }

    #[test]
    fn test_wrong_password() {
        let (_temp, mut gate) = make_gate();
        let rx = gate.subscribe();

        gate.authenticate("alice", "nope");

        assert!(!gate.is_authenticated());
        assert_eq!(
            drain(&rx),
            vec![ModelEvent::AuthenticationFail(AUTH_FAIL_MESSAGE.to_string())]
        );
    }

    #[test]
    fn test_missing_fields() {
        let (_temp, mut gate) = make_gate();
        let rx = gate.subscribe();

        gate.authenticate("", "s3cret");
        gate.authenticate("alice", "");

        assert_eq!(
            drain(&rx),
            vec![
                ModelEvent::AuthenticationFail("Username is required.".to_string()),
                ModelEvent::AuthenticationFail("Password is required.".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_path_requires_login() {
        let (temp, mut gate) = make_gate();
        let sub = temp.path().join("sub");

        gate.set_path(&sub);
        assert_eq!(gate.current_path(), temp.path());

        gate.authenticate("alice", "s3cret");
        gate.set_path(&sub);
        assert_eq!(gate.current_path(), sub.as_path());
        assert!(gate.entries().is_empty());
    }

    #[test]
    fn test_logout() {
        let (_temp, mut gate) = make_gate();
        gate.authenticate("alice", "s3cret");
        let rx = gate.subscribe();

        gate.logout();

        assert!(!gate.is_authenticated());
        assert!(gate.entries().is_empty());
        assert_eq!(drain(&rx), vec![ModelEvent::EntriesChanged]);

        gate.logout();
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("alice", "s3cret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("s3cret"));
    }
}
