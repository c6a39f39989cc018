//! fixed window geometry and hit-testing for the hand buttons

use crate::libgame::Choice;
use raylib::prelude::*;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 400;
pub const HAND_SIZE: f32 = 128.0;

pub const PLAYER_HAND: Vector2 = Vector2 { x: 80.0, y: 100.0 };
pub const COMPUTER_HAND: Vector2 = Vector2 { x: 550.0, y: 100.0 };

pub struct Button {
    pub choice: Choice,
    pub rect: Rectangle,
}

fn button(choice: Choice, x: f32) -> Button {
    Button {
        choice,
        rect: Rectangle {
            x,
            y: 300.0,
            width: 180.0,
            height: 36.0,
        },
    }
}

/// rock, scissors, paper from left to right
pub fn buttons() -> [Button; 3] {
    [
        button(Choice::Rock, 100.0),
        button(Choice::Scissors, 310.0),
        button(Choice::Paper, 520.0),
    ]
}

pub fn frame() -> Rectangle {
    Rectangle {
        x: WINDOW_WIDTH as f32 * 0.01,
        y: WINDOW_HEIGHT as f32 * 0.01,
        width: WINDOW_WIDTH as f32 * 0.98,
        height: WINDOW_HEIGHT as f32 * 0.98,
    }
}

pub fn banner() -> Rectangle {
    Rectangle {
        x: 330.0,
        y: 250.0,
        width: 140.0,
        height: 30.0,
    }
}

pub fn hand_rec() -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: HAND_SIZE,
        height: HAND_SIZE,
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

pub fn choice_at(point: Vector2) -> Option<Choice> {
    buttons()
        .iter()
        .find(|b| contains(&b.rect, point))
        .map(|b| b.choice)
}
