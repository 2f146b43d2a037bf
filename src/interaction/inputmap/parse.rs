use super::types::{InputBindings, KeyList};
use crate::interaction::input::actions::ShipAction;
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedBindings {
    pub bindings: InputBindings,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    bindings: Option<HashMap<String, Vec<String>>>,
}

/// Parse a bindings file. Actions listed in the file replace their default
/// keys; anything that fails to parse is reported and keeps its default.
pub fn parse_bindings_toml(raw: &str) -> ParsedBindings {
    let mut result = ParsedBindings::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };
    let Some(section) = root.bindings else {
        return result;
    };
    let mut names: Vec<_> = section.into_iter().collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, tokens) in names {
        let Some(action) = ShipAction::from_name(&name) else {
            result
                .errors
                .push(format!("Binding references unknown action '{name}'"));
            continue;
        };
        match parse_key_list(&tokens) {
            Ok(keys) => {
                result.bindings.by_action.insert(action, keys);
            }
            Err(err) => result.errors.push(format!("[binding {name}] {err}")),
        }
    }
    result
}

fn parse_key_list(tokens: &[String]) -> Result<KeyList, String> {
    let mut keys = KeyList::new();
    let mut seen = HashSet::new();
    for token in tokens {
        let key = parse_token(token.trim())?;
        if !seen.insert(key) {
            return Err(format!("Duplicate key {key:?}"));
        }
        keys.push(key);
    }
    if keys.is_empty() {
        return Err("Empty binding".into());
    }
    Ok(keys)
}

fn parse_token(s: &str) -> Result<KeyCode, String> {
    let Some(rest) = s.strip_prefix("Key:") else {
        return Err(format!("Unrecognized token '{s}' (expected Key:<name>)"));
    };
    parse_keycode(rest)
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let letter = name.strip_prefix("Key").filter(|r| r.len() == 1).unwrap_or(name);
    let kc = match letter {
        "A" => KeyCode::KeyA,
        "B" => KeyCode::KeyB,
        "C" => KeyCode::KeyC,
        "D" => KeyCode::KeyD,
        "E" => KeyCode::KeyE,
        "F" => KeyCode::KeyF,
        "G" => KeyCode::KeyG,
        "H" => KeyCode::KeyH,
        "I" => KeyCode::KeyI,
        "J" => KeyCode::KeyJ,
        "K" => KeyCode::KeyK,
        "L" => KeyCode::KeyL,
        "M" => KeyCode::KeyM,
        "N" => KeyCode::KeyN,
        "O" => KeyCode::KeyO,
        "P" => KeyCode::KeyP,
        "Q" => KeyCode::KeyQ,
        "R" => KeyCode::KeyR,
        "S" => KeyCode::KeyS,
        "T" => KeyCode::KeyT,
        "U" => KeyCode::KeyU,
        "V" => KeyCode::KeyV,
        "W" => KeyCode::KeyW,
        "X" => KeyCode::KeyX,
        "Y" => KeyCode::KeyY,
        "Z" => KeyCode::KeyZ,
        "Space" => KeyCode::Space,
        "Escape" => KeyCode::Escape,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ControlLeft" => KeyCode::ControlLeft,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "F1" => KeyCode::F1,
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults_per_action() {
        let parsed = parse_bindings_toml(
            r#"
            [bindings]
            MoveUp = ["Key:W", "Key:ArrowUp"]
            Fire = ["Key:KeyF"]
            "#,
        );
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let b = &parsed.bindings;
        assert_eq!(b.keys(ShipAction::MoveUp), &[KeyCode::KeyW, KeyCode::ArrowUp]);
        assert_eq!(b.keys(ShipAction::Fire), &[KeyCode::KeyF]);
        assert_eq!(b.keys(ShipAction::Exit), &[KeyCode::Escape]);
    }

    #[test]
    fn bad_entries_reported_and_defaults_kept() {
        let parsed = parse_bindings_toml(
            r#"
            [bindings]
            Jump = ["Key:Space"]
            Fire = ["Mouse:Left"]
            Exit = ["Key:Escape", "Key:Escape"]
            "#,
        );
        assert_eq!(parsed.errors.len(), 3, "{:?}", parsed.errors);
        assert_eq!(parsed.bindings, InputBindings::default());
    }

    #[test]
    fn empty_file_is_defaults() {
        let parsed = parse_bindings_toml("");
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.bindings, InputBindings::default());
    }

    #[test]
    fn malformed_toml_is_one_error() {
        let parsed = parse_bindings_toml("[bindings\nFire = ");
        assert_eq!(parsed.errors.len(), 1);
        assert!(parsed.errors[0].starts_with("Top-level parse"));
    }
}
