use anyhow::Context;
use clap::Parser;
use log::info;
use raylib::prelude::*;
use rockpaperscissors::{
    libclient::{
        config::Config,
        drawing::draw_table,
        input::read_choice,
        l10n::EN,
        layout::{choice_at, WINDOW_HEIGHT, WINDOW_WIDTH},
        state::Session,
        textures::TextureStore,
    },
    libgame::MoveGenerator,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    info!("starting with {:?}", config);

    let mut moves = match config.seed {
        Some(seed) => MoveGenerator::seeded(seed),
        None => MoveGenerator::from_entropy(),
    };

    set_trace_log(TraceLogLevel::LOG_FATAL);
    let (mut handle, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(EN.title)
        .build();
    handle.set_target_fps(config.fps);

    let ts = TextureStore::new(&mut handle, &thread, &config.media)
        .with_context(|| format!("loading hands from {}", config.media.display()))?;
    let mut session = Session::new();

    while !handle.window_should_close() {
        if let Some(yours) = read_choice(&handle) {
            let computer = moves.next_move();
            session.play(yours, computer);
        }

        let hovered = choice_at(handle.get_mouse_position());
        let mut draw_handle = handle.begin_drawing(&thread);
        draw_table(&mut draw_handle, &ts, &session, hovered);
    }

    info!(
        "done after {} rounds ({})",
        session.scores.rounds(),
        EN.score(&session.scores)
    );
    Ok(())
}
