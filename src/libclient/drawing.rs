use crate::libclient::l10n::EN;
use crate::libclient::layout::{
    banner, buttons, frame, hand_rec, COMPUTER_HAND, PLAYER_HAND, WINDOW_HEIGHT,
};
use crate::libclient::state::{GameState, Session};
use crate::libclient::textures::TextureStore;
use crate::libgame::{Choice, Tone};
use raylib::prelude::*;

pub const BACKGROUND: Color = Color {
    r: 173,
    g: 216,
    b: 230,
    a: 255,
};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Warning => Color::YELLOW,
        Tone::Positive => Color::GREEN,
        Tone::Negative => Color::RED,
    }
}

fn draw_centered(
    draw_handle: &mut RaylibDrawHandle,
    text: &str,
    rect: Rectangle,
    size: i32,
    color: Color,
) {
    let width = measure_text(text, size);
    let x = rect.x as i32 + (rect.width as i32 - width) / 2;
    let y = rect.y as i32 + (rect.height as i32 - size) / 2;
    draw_handle.draw_text(text, x, y, size, color);
}

fn draw_outline(draw_handle: &mut RaylibDrawHandle, rect: Rectangle, color: Color) {
    draw_handle.draw_rectangle_lines(
        rect.x as i32,
        rect.y as i32,
        rect.width as i32,
        rect.height as i32,
        color,
    );
}

fn draw_labels(draw_handle: &mut RaylibDrawHandle) {
    draw_handle.draw_text(EN.header, 298, 20, 20, Color::BLACK);
    draw_handle.draw_text(EN.player, 80, 60, 15, Color::BLACK);
    draw_handle.draw_text(EN.vs, 390, 60, 15, Color::BLACK);
    draw_handle.draw_text(EN.computer, 550, 60, 15, Color::BLACK);
}

fn draw_hand(draw_handle: &mut RaylibDrawHandle, ts: &TextureStore, choice: Choice, at: Vector2) {
    draw_handle.draw_texture_rec(ts.get(choice), hand_rec(), at, Color::WHITE);
}

pub fn draw_buttons(draw_handle: &mut RaylibDrawHandle, hovered: Option<Choice>) {
    for button in buttons().iter() {
        let fill = if hovered == Some(button.choice) {
            Color::GRAY
        } else {
            Color::LIGHTGRAY
        };
        draw_handle.draw_rectangle_rec(button.rect, fill);
        draw_outline(draw_handle, button.rect, Color::DARKGRAY);
        draw_centered(
            draw_handle,
            EN.choice(button.choice),
            button.rect,
            20,
            Color::BLACK,
        );
    }
}

pub fn draw_table(
    draw_handle: &mut RaylibDrawHandle,
    ts: &TextureStore,
    session: &Session,
    hovered: Option<Choice>,
) {
    draw_handle.clear_background(Color::WHITE);
    draw_handle.draw_rectangle_rec(frame(), BACKGROUND);
    draw_labels(draw_handle);

    match session.state {
        GameState::WaitingForChoice => {
            draw_outline(draw_handle, banner(), Color::BLACK);
            draw_centered(draw_handle, EN.prompt, banner(), 10, Color::BLACK);
        }
        GameState::GotOutcome { yours, result } => {
            draw_hand(draw_handle, ts, yours, PLAYER_HAND);
            draw_hand(draw_handle, ts, result.opposing, COMPUTER_HAND);

            draw_handle.draw_rectangle_rec(banner(), tone_color(result.tone));
            draw_outline(draw_handle, banner(), Color::BLACK);
            draw_centered(
                draw_handle,
                EN.outcome(result.outcome),
                banner(),
                10,
                Color::BLACK,
            );
        }
    }

    draw_buttons(draw_handle, hovered);
    draw_handle.draw_text(
        &EN.score(&session.scores),
        10,
        WINDOW_HEIGHT - 20,
        10,
        Color::BLACK,
    );
}
