use crate::watch::Selector;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    Pending,
    Chosen(String),
    Aborted,
}

/// Game picker bindings: j/k or arrows to move, Enter to pick, q/Esc/Ctrl-C to quit.
pub fn handle_selector_key(key_event: KeyEvent, selector: &mut Selector) -> SelectorAction {
    // Windows reports key releases too.
    if key_event.kind != KeyEventKind::Press {
        return SelectorAction::Pending;
    }

    match (key_event.code, key_event.modifiers) {
        (Char('q') | KeyCode::Esc, _) | (Char('c'), KeyModifiers::CONTROL) => {
            SelectorAction::Aborted
        }
        (Char('j') | KeyCode::Down, _) => {
            selector.next();
            SelectorAction::Pending
        }
        (Char('k') | KeyCode::Up, _) => {
            selector.previous();
            SelectorAction::Pending
        }
        (KeyCode::Enter, _) => match selector.selected() {
            Some(choice) => SelectorAction::Chosen(choice.game_id.clone()),
            None => SelectorAction::Aborted,
        },
        _ => SelectorAction::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch::GameChoice;

    fn selector() -> Selector {
        Selector::new(vec![
            GameChoice { game_id: "200".into(), label: "Duke vs UNC".into() },
            GameChoice { game_id: "300".into(), label: "Iowa vs Purdue".into() },
        ])
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn move_then_choose() {
        let mut selector = selector();
        assert_eq!(handle_selector_key(press(KeyCode::Down), &mut selector), SelectorAction::Pending);
        assert_eq!(
            handle_selector_key(press(KeyCode::Enter), &mut selector),
            SelectorAction::Chosen("300".into())
        );

        assert_eq!(handle_selector_key(press(Char('k')), &mut selector), SelectorAction::Pending);
        assert_eq!(
            handle_selector_key(press(KeyCode::Enter), &mut selector),
            SelectorAction::Chosen("200".into())
        );
    }

    #[test]
    fn quit_keys_abort() {
        let mut selector = selector();
        assert_eq!(handle_selector_key(press(Char('q')), &mut selector), SelectorAction::Aborted);
        assert_eq!(handle_selector_key(press(KeyCode::Esc), &mut selector), SelectorAction::Aborted);
        let ctrl_c = KeyEvent::new(Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_selector_key(ctrl_c, &mut selector), SelectorAction::Aborted);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut selector = selector();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_selector_key(release, &mut selector), SelectorAction::Pending);
    }

    #[test]
    fn enter_on_empty_list_aborts() {
        let mut selector = Selector::new(Vec::new());
        assert_eq!(handle_selector_key(press(KeyCode::Enter), &mut selector), SelectorAction::Aborted);
    }
}
