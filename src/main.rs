mod angles;
mod arena;
mod canvas;
mod config;
mod grid;
mod lurker;
mod player;
mod raycast;
mod renderer;
mod rooms;
mod steering;
mod tile;

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena::Arena;
use canvas::Canvas;
use player::{Intent, Player};
use renderer::Renderer;

enum KeyAction {
    Quit,
    Move(Intent),
    Ignore,
}

fn map_key(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('w') | KeyCode::Up => KeyAction::Move(Intent::Up),
        KeyCode::Char('a') | KeyCode::Left => KeyAction::Move(Intent::Left),
        KeyCode::Char('s') | KeyCode::Down => KeyAction::Move(Intent::Down),
        KeyCode::Char('d') | KeyCode::Right => KeyAction::Move(Intent::Right),
        _ => KeyAction::Ignore,
    }
}

fn main() -> io::Result<()> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let arena = match Arena::generate(config::ARENA_SIZE, config::ARENA_SIZE, &mut rng) {
        Ok(arena) => arena,
        Err(err) => {
            eprintln!("[GLOAM] arena generation failed: {err}");
            std::process::exit(1);
        }
    };

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;

    let result = run(&mut out, arena, &mut rng);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, mut arena: Arena, rng: &mut ChaCha8Rng) -> io::Result<()> {
    let mut canvas = Canvas::for_grid(&arena.grid, config::CANVAS_SCALE_X, config::CANVAS_SCALE_Y);
    let mut renderer = Renderer::new();
    let (player_x, player_y) = arena.first_open_cell().unwrap_or((1, 1));
    let mut player = Player {
        x: player_x,
        y: player_y,
    };

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;

    loop {
        // The poll timeout doubles as the frame timer.
        if event::poll(Duration::from_millis(16))? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match map_key(key.code) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Move(intent) => player.apply(intent, &arena.grid),
                        KeyAction::Ignore => {}
                    }
                }
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        accumulator += frame_time.min(0.1);
        while accumulator >= config::FIXED_DT {
            steering::update_lurkers(&mut arena.lurkers, &arena.grid, rng, config::FIXED_DT);
            accumulator -= config::FIXED_DT;
        }

        canvas.draw_grid(&arena.grid);
        raycast::draw_detection_cones(&mut canvas, &arena.lurkers);
        canvas.draw_lurkers(&arena.lurkers);
        canvas.draw_player(player.x, player.y);

        renderer.present(out, &canvas, frame_time)?;
    }
}
