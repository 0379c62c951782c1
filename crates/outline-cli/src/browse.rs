use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use outline_engine::{Document, to_outline_string};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{Stdout, stdout};

struct App {
    documents: Vec<Document>,
    list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(documents: Vec<Document>) -> Self {
        let mut app = Self {
            documents,
            list_state: ListState::default(),
            current_content: Vec::new(),
        };

        if !app.documents.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.documents.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.documents.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = self
            .list_state
            .selected()
            .and_then(|i| self.documents.get(i))
            .map(|doc| to_outline_string(doc).lines().map(str::to_string).collect())
            .unwrap_or_default();
    }
}

/// Show `documents` in a two-pane terminal viewer until the user quits.
pub fn run(documents: Vec<Document>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(documents);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_document(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_document(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .documents
        .iter()
        .map(|doc| {
            let counts = format!(" ({}f/{}t)", doc.functions.len(), doc.types.len());
            ListItem::new(Line::from(vec![
                Span::raw(doc.name.clone()),
                Span::styled(counts, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Documents"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let content_text: Vec<Line> = if app.current_content.is_empty() {
        vec![Line::from("No outline documents found")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Outline"));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from("q: Quit | ↑/k: Previous | ↓/j: Next"));
    f.render_widget(help, rows[1]);
}
