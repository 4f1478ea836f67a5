mod app;
mod config;
mod core;
mod logging;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ui::components::content_area;
use ui::{BrowserPaneView, StatusLine};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    // 핸들이 살아 있어야 기록됨
    let _logger = match logging::logger_setup() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {:#}", e);
            None
        }
    };

    let arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load()?;
    let start_path = config.resolve_start_path(arg)?;
    info!("starting in {}", start_path.display());

    let mut app = App::new(&config, start_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("event loop failed: {:?}", err);
        eprintln!("Error: {:?}", err);
        return Err(err);
    }

    if let Some(path) = app.into_opened() {
        println!("{}", path.display());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render_main_ui(f, app))?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                // Windows는 release 이벤트도 보냄
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 패널 영역과 상태 줄 영역
fn main_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    (chunks[0], chunks[1])
}

fn render_main_ui(f: &mut Frame<'_>, app: &mut App) {
    let (pane_area, status_area) = main_areas(f.area());

    // 스크롤 계산은 실제 행 영역 높이 기준
    let density = app.pane().density();
    let viewport = content_area(pane_area, density).height as usize;
    app.pane_mut().set_viewport_height(viewport);

    let theme = app.theme();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary.to_color())),
        f.area(),
    );

    let pane = BrowserPaneView::new(app.pane())
        .icon_mode(app.icon_mode())
        .theme(theme);
    f.render_widget(pane, pane_area);

    let (folders, files) = app.counts();
    let status = StatusLine::new()
        .counts(folders, files)
        .browse_mode(app.pane().browse_mode())
        .view_type(app.pane().view_type())
        .message(app.status_message())
        .theme(theme);
    f.render_widget(status, status_area);
}
