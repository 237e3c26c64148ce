//! Key scripts for `kptool replay`.
//!
//! A script is plain text typed key by key. Named keys are written in
//! angle brackets (`<BS>`, `<LEFT>`, ...); a literal `<` is `<LT>`. Line
//! breaks only wrap long scripts and produce no key; use `<ENTER>` for
//! the Return key.

use kp_session::{KeyCode, KeyEvent};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key <{name}> at offset {offset}")]
    UnknownKey { name: String, offset: usize },

    #[error("unterminated key name at offset {offset}")]
    Unterminated { offset: usize },
}

fn named_key(name: &str) -> Option<KeyEvent> {
    let code = match name.to_ascii_uppercase().as_str() {
        "BS" => KeyCode::Backspace,
        "DEL" => KeyCode::Delete,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "ENTER" => KeyCode::Return,
        "TAB" => KeyCode::Tab,
        "ESC" => KeyCode::Escape,
        "LT" => return Some(KeyEvent::char('<')),
        _ => return None,
    };
    Some(KeyEvent::key(code))
}

/// Parse a key script into the events a host would forward.
pub fn parse_script(script: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let mut events = Vec::new();
    let mut rest = script;
    let mut offset = 0;

    while let Some(ch) = rest.chars().next() {
        let consumed = match ch {
            '<' => {
                let close = rest.find('>').ok_or(ScriptError::Unterminated { offset })?;
                let name = &rest[1..close];
                let event = named_key(name).ok_or_else(|| ScriptError::UnknownKey {
                    name: name.to_string(),
                    offset,
                })?;
                events.push(event);
                close + 1
            }
            '\n' | '\r' => 1,
            c => {
                events.push(KeyEvent::char(c));
                c.len_utf8()
            }
        };
        rest = &rest[consumed..];
        offset += consumed;
    }

    Ok(events)
}
