/// Keys the presentation view reacts to, parsed from DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Space,
    Escape,
    Home,
    End,
    Char(char),
}

impl Key {
    pub fn parse(key: &str) -> Option<Key> {
        let key = match key {
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Home" => Key::Home,
            "End" => Key::End,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Keys whose default action scrolls the page.
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            Key::Space | Key::ArrowRight | Key::ArrowLeft | Key::ArrowUp | Key::ArrowDown
        )
    }
}

/// Everything a presentation view can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    JumpTo(usize),
    First,
    Last,
    ToggleAutoPlay,
    ToggleFullScreen,
    Reset,
    Exit,
}

impl Command {
    pub fn for_key(key: Key) -> Option<Command> {
        match key {
            Key::ArrowRight | Key::Space => Some(Command::Next),
            Key::ArrowLeft => Some(Command::Previous),
            Key::Escape => Some(Command::Exit),
            Key::Home => Some(Command::First),
            Key::End => Some(Command::Last),
            Key::Char(c) if c.eq_ignore_ascii_case(&'f') => Some(Command::ToggleFullScreen),
            _ => None,
        }
    }
}

/// DOM key names the browser must `preventDefault()` for.
pub fn prevent_default_keys() -> Vec<&'static str> {
    ["ArrowRight", "ArrowLeft", "ArrowUp", "ArrowDown", " "]
        .into_iter()
        .filter(|name| Key::parse(name).is_some_and(|k| k.prevents_default()))
        .collect()
}
