use super::*;
use crate::models::FsEntry;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Refresh,
    SetPath(PathBuf),
    Authenticate(String, String),
}

/// 호출을 기록하는 테스트용 모델
struct MockModel {
    current: PathBuf,
    tree: HashMap<PathBuf, Vec<FsEntry>>,
    entries: Vec<FsEntry>,
    requires_auth: bool,
    authenticated: Rc<Cell<bool>>,
    password: String,
    calls: Rc<RefCell<Vec<Call>>>,
    notifier: Notifier<ModelEvent>,
}

impl MockModel {
    fn new(entries: Vec<FsEntry>) -> (Self, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut tree = HashMap::new();
        tree.insert(PathBuf::from("/"), entries);
        let model = Self {
            current: PathBuf::from("/"),
            tree,
            entries: Vec::new(),
            requires_auth: false,
            authenticated: Rc::new(Cell::new(false)),
            password: "pw".to_string(),
            calls: Rc::clone(&calls),
            notifier: Notifier::new(),
        };
        (model, calls)
    }

    fn with_folder(mut self, path: &str, entries: Vec<FsEntry>) -> Self {
        self.tree.insert(PathBuf::from(path), entries);
        self
    }

    fn requiring_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// 로그인 상태를 밖에서 바꿀 수 있는 핸들
    fn auth_handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.authenticated)
    }

    fn load(&mut self) {
        self.entries = if self.requires_auth && !self.authenticated.get() {
            Vec::new()
        } else {
            self.tree.get(&self.current).cloned().unwrap_or_default()
        };
    }
}

impl FsbModel for MockModel {
    fn refresh(&mut self) {
        self.calls.borrow_mut().push(Call::Refresh);
        self.load();
        self.notifier.emit(ModelEvent::EntriesChanged);
    }

    fn requires_authentication(&self) -> bool {
        self.requires_auth
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    fn authenticate(&mut self, username: &str, password: &str) {
        self.calls
            .borrow_mut()
            .push(Call::Authenticate(username.to_string(), password.to_string()));
        if password == self.password {
            self.authenticated.set(true);
            self.load();
            self.notifier.emit(ModelEvent::AuthenticationSuccess);
        } else {
            self.notifier
                .emit(ModelEvent::AuthenticationFail("Bad credentials".to_string()));
        }
    }

    fn set_path(&mut self, path: &Path) {
        self.calls.borrow_mut().push(Call::SetPath(path.to_path_buf()));
        self.current = path.to_path_buf();
        self.load();
        self.notifier.emit(ModelEvent::EntriesChanged);
    }

    fn current_path(&self) -> &Path {
        &self.current
    }

    fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.notifier.subscribe()
    }
}

fn sample_entries() -> Vec<FsEntry> {
    vec![FsEntry::folder("a"), FsEntry::file("b")]
}

fn bound_pane(model: MockModel) -> (BrowserPane, Receiver<PaneEvent>) {
    let mut pane = BrowserPane::new();
    let events = pane.subscribe();
    pane.bind(Box::new(model));
    (pane, events)
}

fn drain(rx: &Receiver<PaneEvent>) -> Vec<PaneEvent> {
    rx.try_iter().collect()
}

fn set_path_calls(calls: &Rc<RefCell<Vec<Call>>>) -> Vec<PathBuf> {
    calls
        .borrow()
        .iter()
        .filter_map(|call| match call {
            Call::SetPath(path) => Some(path.clone()),
            _ => None,
        })
        .collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(pane: &mut BrowserPane, text: &str) {
    for c in text.chars() {
        pane.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_new_pane_defaults() {
    let pane = BrowserPane::new();

    assert_eq!(pane.browse_mode(), BrowseMode::OpenFile);
    assert_eq!(pane.view_type(), ViewType::Icon);
    assert!(!pane.is_login_visible());
    assert!(pane.rows().is_empty());
    assert!(pane.warning().is_none());
}

#[test]
fn test_refresh_without_model_is_noop() {
    let mut pane = BrowserPane::new();
    pane.refresh();
    pane.pump();
    assert!(pane.rows().is_empty());
}

#[test]
fn test_bind_reloads_model_and_builds_rows() {
    let (model, calls) = MockModel::new(sample_entries());
    let (pane, _events) = bound_pane(model);

    assert_eq!(*calls.borrow(), vec![Call::Refresh]);
    assert_eq!(pane.rows().len(), 2);
}

#[test]
fn test_bind_does_not_rebuild_on_next_pump() {
    let (model, calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model);
    pane.select_row(1);

    pane.pump();
    assert_eq!(pane.selected_index(), Some(1));
    assert_eq!(*calls.borrow(), vec![Call::Refresh]);
}

#[test]
fn test_rows_mirror_entries_in_order_with_sequential_ids() {
    let entries = vec![
        FsEntry::file("z.csv"),
        FsEntry::folder("m"),
        FsEntry::file("a.txt"),
    ];

    for view in [ViewType::Icon, ViewType::List] {
        let (model, _calls) = MockModel::new(entries.clone());
        let mut pane = BrowserPane::new();
        pane.set_view_type(view);
        pane.bind(Box::new(model));

        let paths: Vec<&Path> = pane.rows().iter().map(|row| row.path()).collect();
        assert_eq!(
            paths,
            vec![Path::new("z.csv"), Path::new("m"), Path::new("a.txt")]
        );
        let ids: Vec<usize> = pane.rows().iter().map(|row| row.id()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

#[test]
fn test_list_view_is_compact_with_zero_spacing() {
    for entries in [Vec::new(), sample_entries()] {
        let (model, _calls) = MockModel::new(entries);
        let mut pane = BrowserPane::new();
        pane.set_view_type(ViewType::List);
        pane.bind(Box::new(model));

        assert_eq!(pane.density().spacing, 0);
        assert_eq!(pane.density().margins, 8);
        assert!(pane.rows().iter().all(|row| row.is_compact()));
    }
}

#[test]
fn test_icon_view_uses_positive_spacing() {
    for entries in [Vec::new(), sample_entries()] {
        let (model, _calls) = MockModel::new(entries);
        let (pane, _events) = bound_pane(model);

        assert_eq!(pane.density().spacing, 8);
        assert_eq!(pane.density().margins, 12);
        assert!(pane.rows().iter().all(|row| !row.is_compact()));
    }
}

#[test]
fn test_setters_take_effect_on_next_refresh() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model);

    pane.set_view_type(ViewType::List);
    assert!(!pane.rows()[0].is_compact());
    assert_eq!(pane.density().spacing, 8);

    pane.refresh();
    assert!(pane.rows()[0].is_compact());
    assert_eq!(pane.density().spacing, 0);
}

#[test]
fn test_refresh_rebuilds_rows_and_clears_selection() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model);

    pane.select_row(1);
    assert_eq!(pane.selected_index(), Some(1));

    pane.refresh();
    assert_eq!(pane.selected_index(), None);
    assert_eq!(pane.rows().len(), 2);
}

#[test]
fn test_unauthenticated_shows_prompt_and_no_rows() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (pane, _events) = bound_pane(model.requiring_auth());

    assert!(pane.is_login_visible());
    assert!(pane.rows().is_empty());
}

#[test]
fn test_refresh_after_losing_authentication_clears_rows() {
    let (model, _calls) = MockModel::new(sample_entries());
    let model = model.requiring_auth();
    let auth = model.auth_handle();
    let (mut pane, _events) = bound_pane(model);

    pane.login_requested("user", "pw");
    pane.pump();
    pane.select_row(1);
    assert_eq!(pane.rows().len(), 2);

    auth.set(false);
    pane.refresh();

    assert!(pane.rows().is_empty());
    assert_eq!(pane.selected_index(), None);
    assert_eq!(pane.content_height(), 0);
    assert_eq!(pane.scroll().offset(), 0);
    assert!(pane.is_login_visible());
}

#[test]
fn test_prompt_hidden_when_not_required() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (pane, _events) = bound_pane(model);

    assert!(!pane.is_login_visible());
}

#[test]
fn test_select_file_emits_entry_selected() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, events) = bound_pane(model);

    pane.select_row(1);

    assert_eq!(
        drain(&events),
        vec![PaneEvent::EntrySelected(PathBuf::from("b"))]
    );
    assert!(pane.is_checked(1));
}

#[test]
fn test_select_folder_only_highlights() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, events) = bound_pane(model);

    pane.select_row(0);

    assert!(drain(&events).is_empty());
    assert!(pane.is_checked(0));
}

#[test]
fn test_open_file_mode_scenario() {
    let (model, calls) = MockModel::new(sample_entries());
    let (mut pane, events) = bound_pane(model);
    assert_eq!(pane.rows().len(), 2);

    pane.activate_row(1);
    assert_eq!(
        drain(&events),
        vec![PaneEvent::EntryOpened(PathBuf::from("b"))]
    );
    assert!(set_path_calls(&calls).is_empty());

    pane.activate_row(0);
    assert!(drain(&events).is_empty());
    assert_eq!(set_path_calls(&calls), vec![PathBuf::from("a")]);
}

#[test]
fn test_open_folder_mode_scenario() {
    let (model, calls) = MockModel::new(sample_entries());
    let mut pane = BrowserPane::new();
    let events = pane.subscribe();
    pane.set_browse_mode(BrowseMode::OpenFolder);
    pane.bind(Box::new(model));

    pane.activate_row(0);
    pane.activate_row(1);

    assert_eq!(
        drain(&events),
        vec![
            PaneEvent::EntryOpened(PathBuf::from("a")),
            PaneEvent::EntryOpened(PathBuf::from("b")),
        ]
    );
    assert!(set_path_calls(&calls).is_empty());
}

#[test]
fn test_navigating_into_folder_refreshes_after_pump() {
    let (model, _calls) = MockModel::new(sample_entries());
    let model = model.with_folder("a", vec![FsEntry::file("a/inner.csv")]);
    let (mut pane, _events) = bound_pane(model);

    pane.activate_row(0);
    assert_eq!(pane.rows().len(), 2);

    pane.pump();
    assert_eq!(pane.rows().len(), 1);
    assert_eq!(pane.rows()[0].path(), Path::new("a/inner.csv"));
    assert_eq!(pane.current_path(), Some(Path::new("a")));
}

#[test]
fn test_login_submission_forwards_credentials_verbatim() {
    let (model, calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model.requiring_auth());

    type_text(&mut pane, " alice ");
    pane.handle_key(key(KeyCode::Tab));
    type_text(&mut pane, "pw");
    pane.handle_key(key(KeyCode::Enter));

    assert!(calls
        .borrow()
        .contains(&Call::Authenticate(" alice ".to_string(), "pw".to_string())));
}

#[test]
fn test_authentication_failure_scenario() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model.requiring_auth());
    assert!(pane.is_login_visible());
    assert!(pane.rows().is_empty());

    pane.login_requested("alice", "wrong");
    // 결과는 알림으로 도착
    assert!(pane.warning().is_none());
    pane.pump();

    assert_eq!(pane.warning(), Some("Bad credentials"));
    assert!(pane.is_login_visible());
    assert!(pane.rows().is_empty());
}

#[test]
fn test_authentication_success_shows_entries() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model.requiring_auth());

    pane.login_requested("alice", "pw");
    pane.pump();

    assert!(!pane.is_login_visible());
    assert_eq!(pane.rows().len(), 2);
}

#[test]
fn test_warning_is_modal_until_dismissed() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model);
    pane.authentication_failed("Session expired".to_string());

    assert!(pane.handle_key(key(KeyCode::Down)));
    assert_eq!(pane.selected_index(), None);

    assert!(pane.handle_key(key(KeyCode::Esc)));
    assert!(pane.warning().is_none());

    pane.handle_key(key(KeyCode::Down));
    assert_eq!(pane.selected_index(), Some(0));
}

#[test]
fn test_keyboard_navigation_selects_and_activates() {
    let entries = vec![
        FsEntry::folder("a"),
        FsEntry::file("b"),
        FsEntry::file("c"),
    ];
    let (model, _calls) = MockModel::new(entries);
    let (mut pane, events) = bound_pane(model);

    pane.handle_key(key(KeyCode::Down));
    assert_eq!(pane.selected_index(), Some(0));
    pane.handle_key(key(KeyCode::Char('j')));
    pane.handle_key(key(KeyCode::Char('j')));
    pane.handle_key(key(KeyCode::Char('j')));
    assert_eq!(pane.selected_index(), Some(2));
    pane.handle_key(key(KeyCode::Char('k')));
    pane.handle_key(key(KeyCode::Enter));

    assert_eq!(
        drain(&events),
        vec![
            PaneEvent::EntrySelected(PathBuf::from("b")),
            PaneEvent::EntrySelected(PathBuf::from("c")),
            PaneEvent::EntrySelected(PathBuf::from("b")),
            PaneEvent::EntryOpened(PathBuf::from("b")),
        ]
    );
}

#[test]
fn test_unhandled_keys_fall_through() {
    let (model, _calls) = MockModel::new(sample_entries());
    let (mut pane, _events) = bound_pane(model);

    assert!(!pane.handle_key(key(KeyCode::Char('v'))));
    assert!(!pane.handle_key(key(KeyCode::Backspace)));
}

#[test]
fn test_row_geometry_and_scrolling() {
    let entries: Vec<FsEntry> = (0..10)
        .map(|i| FsEntry::file(format!("f{}.csv", i)))
        .collect();
    let (model, _calls) = MockModel::new(entries);
    let (mut pane, _events) = bound_pane(model);

    // Icon: 2줄 행 + 1줄 간격
    assert_eq!(pane.row_top(3), 9);
    assert_eq!(pane.content_height(), 29);

    pane.set_viewport_height(6);
    pane.select_row(5);
    assert_eq!(pane.scroll().offset(), 11);

    pane.select_row(0);
    assert_eq!(pane.scroll().offset(), 0);
}
