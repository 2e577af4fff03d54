//! Mapping from typed keys to actions.
//!
//! Input arrives one line at a time. A whitespace-separated word that names a
//! key (`ArrowLeft`, `up`, ...) is one key press. A word made only of
//! single-character keys is read as a sequence of presses, so `aaws` is four
//! presses. Any other word is dropped whole, so a misspelled `lefft` does not
//! turn into a stray `l`.

use twofold_core::Direction;

use crate::action::{Action, ActionRequestQueue};

struct NamedKey {
    name: &'static str,
    action: Action,
}

impl NamedKey {
    const fn new(name: &'static str, action: Action) -> Self {
        Self { name, action }
    }

    const fn slide(name: &'static str, direction: Direction) -> Self {
        Self::new(name, Action::Slide(direction))
    }
}

struct CharKey {
    key: char,
    action: Action,
}

impl CharKey {
    const fn new(key: char, action: Action) -> Self {
        Self { key, action }
    }

    const fn slide(key: char, direction: Direction) -> Self {
        Self::new(key, Action::Slide(direction))
    }
}

const NAMED_KEYS: [NamedKey; 10] = [
    NamedKey::slide("ArrowLeft", Direction::Left),
    NamedKey::slide("ArrowRight", Direction::Right),
    NamedKey::slide("ArrowUp", Direction::Up),
    NamedKey::slide("ArrowDown", Direction::Down),
    NamedKey::slide("left", Direction::Left),
    NamedKey::slide("right", Direction::Right),
    NamedKey::slide("up", Direction::Up),
    NamedKey::slide("down", Direction::Down),
    NamedKey::new("new", Action::NewGame),
    NamedKey::new("quit", Action::Quit),
];

const CHAR_KEYS: [CharKey; 10] = [
    CharKey::slide('a', Direction::Left),
    CharKey::slide('h', Direction::Left),
    CharKey::slide('d', Direction::Right),
    CharKey::slide('l', Direction::Right),
    CharKey::slide('w', Direction::Up),
    CharKey::slide('k', Direction::Up),
    CharKey::slide('s', Direction::Down),
    CharKey::slide('j', Direction::Down),
    CharKey::new('n', Action::NewGame),
    CharKey::new('q', Action::Quit),
];

fn named_key(word: &str) -> Option<Action> {
    NAMED_KEYS
        .iter()
        .find(|key| key.name.eq_ignore_ascii_case(word))
        .map(|key| key.action)
}

fn char_key(ch: char) -> Option<Action> {
    let ch = ch.to_ascii_lowercase();
    CHAR_KEYS
        .iter()
        .find(|key| key.key == ch)
        .map(|key| key.action)
}

/// Queues the actions typed on one input line.
pub fn handle_line(line: &str, action_queue: &mut ActionRequestQueue) {
    for word in line.split_whitespace() {
        if let Some(action) = named_key(word) {
            action_queue.request(action);
            continue;
        }
        match word.chars().map(char_key).collect::<Option<Vec<_>>>() {
            Some(actions) => {
                for action in actions {
                    action_queue.request(action);
                }
            }
            None => log::debug!("ignoring unrecognized input {word:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(line: &str) -> Vec<Action> {
        let mut queue = ActionRequestQueue::default();
        handle_line(line, &mut queue);
        queue.take_all().into_iter().collect()
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            actions("ArrowLeft arrowright UP down"),
            [
                Action::Slide(Direction::Left),
                Action::Slide(Direction::Right),
                Action::Slide(Direction::Up),
                Action::Slide(Direction::Down),
            ]
        );
        assert_eq!(actions("new quit"), [Action::NewGame, Action::Quit]);
    }

    #[test]
    fn test_character_keys_in_order() {
        assert_eq!(
            actions("awSD hjkl"),
            [
                Action::Slide(Direction::Left),
                Action::Slide(Direction::Up),
                Action::Slide(Direction::Down),
                Action::Slide(Direction::Right),
                Action::Slide(Direction::Left),
                Action::Slide(Direction::Down),
                Action::Slide(Direction::Up),
                Action::Slide(Direction::Right),
            ]
        );
    }

    #[test]
    fn test_misspelled_words_are_dropped_whole() {
        assert!(actions("lefft").is_empty());
        assert!(actions("dowm").is_empty());
        assert_eq!(actions("rigth up"), [Action::Slide(Direction::Up)]);
    }

    #[test]
    fn test_unrecognized_keys_are_dropped() {
        assert!(actions("").is_empty());
        assert!(actions("   ").is_empty());
        assert!(actions("xyz 123 ?").is_empty());
        assert_eq!(
            actions("x a ! d"),
            [
                Action::Slide(Direction::Left),
                Action::Slide(Direction::Right)
            ]
        );
    }
}
