use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use metamark_core::{Document, MetamarkFile, io, render_ast};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

pub struct App {
    documents_path: PathBuf,
    files: Vec<MetamarkFile>,
    file_list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    pub fn new(documents_path: PathBuf, extension: &str) -> Result<Self> {
        let files = io::list_documents(&documents_path, extension)?;
        debug!(
            "found {} documents under {}",
            files.len(),
            documents_path.display()
        );

        let mut app = Self {
            documents_path,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    pub fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn selected_file(&self) -> Option<&MetamarkFile> {
        self.files.get(self.file_list_state.selected()?)
    }

    pub fn current_content(&self) -> &[String] {
        &self.current_content
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        self.current_content = match file.load(&self.documents_path) {
            Ok(document) => render_document(&document),
            Err(e) => vec![format!("{}: {e}", e.kind().message())],
        };
    }
}

/// Metadata table followed by the AST dump, one entry per display line.
pub fn render_document(document: &Document) -> Vec<String> {
    let mut lines = Vec::new();

    if !document.metadata.is_empty() {
        lines.push("Metadata".to_string());
        for entry in &document.metadata {
            lines.push(format!("  {}: {}", entry.key, entry.value));
        }
        lines.push(String::new());
    }

    lines.extend(render_ast(&document.root, 0).lines().map(str::to_string));
    lines
}

pub fn run(documents_path: PathBuf, extension: &str) -> Result<()> {
    // Create app before touching the terminal so a bad directory is reported cleanly
    let mut app = App::new(documents_path, extension)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(Span::raw(file.display_path().to_string()))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Documents"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Document panel
    let content_text: Vec<Line> = if app.current_content.is_empty() {
        vec![Line::from("No documents found")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(Span::raw(line.clone())))
            .collect()
    };
    let title = app
        .selected_file()
        .map(|file| file.display_path().to_string())
        .unwrap_or_else(|| "Document".to_string());

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]));
    f.render_widget(help, rows[1]);
}
