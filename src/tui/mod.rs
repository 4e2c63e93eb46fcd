pub mod widgets;

use std::path::PathBuf;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::DefaultTerminal;

use crate::library::WallpaperLibrary;
use crate::scheme::Scheme;

use widgets::SchemeWidget;

/// What the scheme panel shows, read back from the scheme document.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemeView {
    Missing,
    Loaded(Scheme),
    Invalid(String),
}

impl SchemeView {
    fn read(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::Missing;
        }
        match Scheme::load(path) {
            Ok(scheme) => Self::Loaded(scheme),
            Err(err) => Self::Invalid(format!("{err:#}")),
        }
    }
}

/// State for the interactive library browser.
pub struct App {
    library: WallpaperLibrary,
    output: PathBuf,
    wallpapers: Vec<String>,
    list_state: ListState,
    scheme: SchemeView,
    status: String,
    pending_removal: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(library: WallpaperLibrary, output: PathBuf) -> Result<Self> {
        let mut app = Self {
            scheme: SchemeView::read(&output),
            library,
            output,
            wallpapers: Vec::new(),
            list_state: ListState::default(),
            status: "Ready".to_string(),
            pending_removal: None,
            should_quit: false,
        };
        app.refresh()?;
        Ok(app)
    }

    pub fn wallpapers(&self) -> &[String] {
        &self.wallpapers
    }

    pub fn selected(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.wallpapers.get(i))
            .map(String::as_str)
    }

    pub fn scheme(&self) -> &SchemeView {
        &self.scheme
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Re-read the library listing, keeping the selection in range.
    pub fn refresh(&mut self) -> Result<()> {
        self.wallpapers = self.library.list()?;
        let selected = match (self.list_state.selected(), self.wallpapers.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if let Some(name) = self.pending_removal.take() {
            if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.remove(&name);
            } else {
                self.status = "Removal cancelled".to_string();
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter => self.apply_selected(),
            KeyCode::Char('d') | KeyCode::Delete => match self.selected().map(str::to_string) {
                Some(name) => self.pending_removal = Some(name),
                None => self.status = "Please select a wallpaper".to_string(),
            },
            KeyCode::Char('r') => match self.refresh() {
                Ok(()) => {
                    self.scheme = SchemeView::read(&self.output);
                    self.status = format!("{} wallpapers", self.wallpapers.len());
                }
                Err(err) => self.status = format!("Error: {err:#}"),
            },
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.wallpapers.is_empty() {
            return;
        }
        let last = self.wallpapers.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    fn apply_selected(&mut self) {
        let Some(name) = self.selected().map(str::to_string) else {
            self.status = "Please select a wallpaper".to_string();
            return;
        };
        match self.library.apply(&name, &self.output) {
            Ok(scheme) => {
                self.scheme = SchemeView::Loaded(scheme);
                self.status = format!("Wallpaper set: {name}");
            }
            Err(err) => {
                log::error!("failed to set wallpaper {name}: {err:#}");
                self.status = format!("Error setting wallpaper: {err:#}");
            }
        }
    }

    fn remove(&mut self, name: &str) {
        let result = self.library.remove(name).and_then(|()| self.refresh());
        self.status = match result {
            Ok(()) => format!("Removed: {name}"),
            Err(err) => format!("Failed to remove wallpaper: {err:#}"),
        };
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [list_area, scheme_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(main);

        let items: Vec<ListItem> = self
            .wallpapers
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let title = format!("Wallpapers ({})", self.library.dir().display());
        let list = List::new(items)
            .block(Block::bordered().title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        frame.render_widget(SchemeWidget::new(&self.scheme), scheme_area);

        let status_line = match &self.pending_removal {
            Some(name) => Line::from(vec![
                Span::styled(
                    format!(" Remove {name}? "),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("(y/n)"),
            ]),
            None => Line::from(vec![
                Span::raw(format!(" {} ", self.status)),
                Span::styled(
                    " enter set  d remove  r refresh  q quit",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        };
        frame.render_widget(Paragraph::new(status_line), status);
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }
}

/// Launch the TUI application.
pub fn run(mut app: App) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = app.event_loop(&mut terminal);
    ratatui::restore();
    result
}
