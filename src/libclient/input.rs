use crate::libclient::layout::choice_at;
use crate::libgame::Choice;
use raylib::prelude::*;

const KEYS: [KeyboardKey; 3] = [
    KeyboardKey::KEY_R,
    KeyboardKey::KEY_P,
    KeyboardKey::KEY_S,
];

pub fn choice_for_key(key: KeyboardKey) -> Option<Choice> {
    match key {
        KeyboardKey::KEY_R => Some(Choice::Rock),
        KeyboardKey::KEY_P => Some(Choice::Paper),
        KeyboardKey::KEY_S => Some(Choice::Scissors),
        _ => None,
    }
}

/// a click on a hand button, or its keyboard shortcut, picks a hand for this frame
pub fn read_choice(handle: &RaylibHandle) -> Option<Choice> {
    if handle.is_mouse_button_pressed(MouseButton::MOUSE_LEFT_BUTTON) {
        if let Some(choice) = choice_at(handle.get_mouse_position()) {
            return Some(choice);
        }
    }

    KEYS.iter()
        .find(|key| handle.is_key_pressed(**key))
        .and_then(|key| choice_for_key(*key))
}
