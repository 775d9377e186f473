use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CategoryUp,
    CategoryDown,
    Previous,
    Next,
    Flip,
    Know,
    Reset,
    Reload,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, kind, .. }) = ev {
        if kind == KeyEventKind::Release {
            return Action::None;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::CategoryUp,
            KeyCode::Down | KeyCode::Char('j') => Action::CategoryDown,
            KeyCode::Left | KeyCode::Char('h') => Action::Previous,
            KeyCode::Right | KeyCode::Char('l') => Action::Next,
            KeyCode::Char(' ') | KeyCode::Enter => Action::Flip,
            KeyCode::Char('y') => Action::Know,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('i') => Action::Reload,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
