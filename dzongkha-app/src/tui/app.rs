use crate::cli::commands::Provider;
use crate::tui::{
    inputs::{map_event, Action},
    transition::{Move, Transition},
    views::{self, Screen},
};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dzongkha_core::{CategoryFilter, LoadOutcome, Origin, ReviewSession};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

pub struct TuiApp {
    pub provider: Provider,
    pub rt: Arc<Runtime>,
    session: ReviewSession,
    categories: Vec<String>,
    sel: usize,
    transition: Transition,
    origin: Option<Origin>,
}

impl TuiApp {
    pub fn new(provider: Provider, rt: Arc<Runtime>, transition_delay: Duration) -> Self {
        Self {
            provider,
            rt,
            session: ReviewSession::default(),
            categories: vec![],
            sel: 0,
            transition: Transition::new(transition_delay),
            origin: None,
        }
    }

    fn load(&mut self) {
        let out = self.rt.block_on(self.provider.load());
        self.apply_outcome(out);
    }

    /// Reseed the store, reload, and start over from the first card.
    fn reload(&mut self) {
        self.transition.cancel();
        let out = self.rt.block_on(self.provider.reseed());
        self.apply_outcome(out);
        self.session.reset();
    }

    fn apply_outcome(&mut self, out: LoadOutcome) {
        self.origin = Some(out.origin);
        self.session.load(out.cards);
        self.categories = self.session.categories();
        let current = self.session.category().label();
        match self.categories.iter().position(|c| c == current) {
            Some(i) => self.sel = i,
            None => {
                // The selected category vanished with the reload.
                self.sel = 0;
                self.session.set_category(CategoryFilter::All);
            }
        }
    }

    fn select_category(&mut self, sel: usize) {
        self.transition.flush(&mut self.session);
        self.sel = sel;
        if let Some(c) = self.categories.get(sel) {
            self.session.set_category(c.as_str());
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.load();

        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.mainloop(&mut terminal);

        disable_raw_mode().ok();
        let mut out: Stdout = std::io::stdout();
        execute!(out, LeaveAlternateScreen).ok();
        terminal.show_cursor().ok();

        res
    }

    fn mainloop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            self.transition.tick(&mut self.session, Instant::now());

            terminal.draw(|f| {
                let screen = Screen {
                    session: &self.session,
                    categories: &self.categories,
                    sel: self.sel,
                    animating: self.transition.is_animating(),
                    offline: self.origin == Some(Origin::Fallback),
                };
                views::draw_ui(f, f.size(), &screen);
            })?;

            if event::poll(Duration::from_millis(50))? {
                let now = Instant::now();
                match map_event(event::read()?) {
                    Action::Quit => break,
                    Action::CategoryUp => {
                        if self.sel > 0 {
                            self.select_category(self.sel - 1);
                        }
                    }
                    Action::CategoryDown => {
                        if self.sel + 1 < self.categories.len() {
                            self.select_category(self.sel + 1);
                        }
                    }
                    Action::Previous => self.transition.start(&mut self.session, Move::Previous, now),
                    Action::Next => self.transition.start(&mut self.session, Move::Next, now),
                    Action::Flip => self.transition.start(&mut self.session, Move::Flip, now),
                    Action::Know => self.transition.start(&mut self.session, Move::Know, now),
                    Action::Reset => {
                        self.transition.cancel();
                        self.session.reset();
                    }
                    Action::Reload => self.reload(),
                    Action::None => {}
                }
            }
        }
        Ok(())
    }
}
