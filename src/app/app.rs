use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use strum::IntoEnumIterator;

use crate::{
    app::ui,
    plot::{Figure, FigureKind},
};

/// Full-screen terminal viewer for rendered figures, one tab per figure.
pub struct App {
    figures: Vec<Figure>,
    selected: usize,
}

impl App {
    /// Tabs follow the order of [`FigureKind`], whatever order the figures come in.
    pub fn new(mut figures: Vec<Figure>) -> Self {
        let order: Vec<FigureKind> = FigureKind::iter().collect();
        figures.sort_by_key(|figure| order.iter().position(|kind| *kind == figure.kind()));

        Self {
            figures,
            selected: 0,
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_tab(&mut self) {
        if !self.figures.is_empty() {
            self.selected = (self.selected + 1) % self.figures.len();
        }
    }

    pub fn previous_tab(&mut self) {
        if !self.figures.is_empty() {
            self.selected = if self.selected == 0 {
                self.figures.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Returns `true` when the key closes the viewer.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.previous_tab(),
            _ => {}
        }
        false
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.figures, self.selected))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}
