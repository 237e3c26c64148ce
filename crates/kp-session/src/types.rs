use kp_core::timing::TimingEvent;

/// Virtual key codes for `KeyEvent::from_raw`, as reported by a Cocoa
/// (`NSEvent.keyCode`) host. Adapters for other toolkits build events
/// with `KeyEvent::char` and `KeyEvent::key` instead.
pub mod key {
    pub const RETURN: u16 = 36;
    pub const TAB: u16 = 48;
    pub const SPACE: u16 = 49;
    pub const BACKSPACE: u16 = 51;
    pub const ESCAPE: u16 = 53;
    pub const KEYPAD_ENTER: u16 = 76;
    pub const HOME: u16 = 115;
    pub const FORWARD_DELETE: u16 = 117;
    pub const END: u16 = 119;
    pub const LEFT: u16 = 123;
    pub const RIGHT: u16 = 124;
    pub const DOWN: u16 = 125;
    pub const UP: u16 = 126;
}

/// What the key does, independent of the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Printable character; the text is in `KeyEvent::ch`.
    Char,
    Space,
    /// Keypad Enter.
    Enter,
    Return,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Tab,
    Escape,
    /// Anything the session does not handle (arrow up/down, function keys).
    Other,
}

impl KeyCode {
    /// Character the key types, as the host reports it.
    fn implied_char(self) -> Option<char> {
        match self {
            Self::Space => Some(' '),
            Self::Enter | Self::Return => Some('\r'),
            Self::Tab => Some('\t'),
            _ => None,
        }
    }
}

/// A raw key press: the text it carries (if any) and its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub ch: Option<char>,
    pub code: KeyCode,
}

impl KeyEvent {
    /// Key press typing `c`.
    pub fn char(c: char) -> Self {
        match c {
            ' ' => Self::key(KeyCode::Space),
            '\t' => Self::key(KeyCode::Tab),
            '\r' | '\n' => Self::key(KeyCode::Return),
            _ => Self {
                ch: Some(c),
                code: KeyCode::Char,
            },
        }
    }

    /// Key press without explicit text.
    pub fn key(code: KeyCode) -> Self {
        Self {
            ch: code.implied_char(),
            code,
        }
    }

    /// Translate a host key code plus the text it produced.
    pub fn from_raw(key_code: u16, text: &str) -> Self {
        let code = match key_code {
            key::RETURN => KeyCode::Return,
            key::KEYPAD_ENTER => KeyCode::Enter,
            key::TAB => KeyCode::Tab,
            key::SPACE => KeyCode::Space,
            key::BACKSPACE => KeyCode::Backspace,
            key::ESCAPE => KeyCode::Escape,
            key::HOME => KeyCode::Home,
            key::FORWARD_DELETE => KeyCode::Delete,
            key::END => KeyCode::End,
            key::LEFT => KeyCode::Left,
            key::RIGHT => KeyCode::Right,
            key::DOWN | key::UP => KeyCode::Other,
            _ => match text.chars().next() {
                Some(c) if !c.is_control() => return Self::char(c),
                _ => KeyCode::Other,
            },
        };
        Self::key(code)
    }

    /// Zero-based popup slot for digit keys `1`..=`9`.
    pub(crate) fn selection_slot(&self) -> Option<usize> {
        match (self.code, self.ch) {
            (KeyCode::Char, Some(c @ '1'..='9')) => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}

/// Popup lifecycle. `Open` exists only while a qualifying prefix is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupState {
    Closed,
    Open {
        /// At most `max_visible` terms, in vocabulary order.
        candidates: Vec<String>,
        prefix: String,
        /// Set only by a digit key; `None` while the popup is merely shown.
        selected: Option<usize>,
    },
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn candidates(&self) -> &[String] {
        match self {
            Self::Open { candidates, .. } => candidates,
            Self::Closed => &[],
        }
    }
}

/// Where the host should draw the popup: directly below the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupAnchor {
    /// Caret position in chars.
    pub caret: usize,
    /// Widest candidate in terminal columns.
    pub width: usize,
}

/// Candidate popup action, exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the popup as-is.
    Keep,
    /// Show or update the popup with these candidates.
    Show {
        candidates: Vec<String>,
        anchor: PopupAnchor,
    },
    /// Hide the popup.
    Hide,
}

/// Response from `handle_key`, returned to the host widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// False when the key was not for the session (the host may act on it).
    pub consumed: bool,
    /// Candidate spliced into the buffer by a digit key.
    pub commit: Option<String>,
    pub candidates: CandidateAction,
    /// Timing events triggered by this key, for the logging sink.
    pub timing: Vec<TimingEvent>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            candidates: CandidateAction::Keep,
            timing: Vec::new(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}
