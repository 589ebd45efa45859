use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use daily_maze::{
    build_scene, maze_number, moves_path, parse_instant, parse_moves, replay, today_seed, Maze,
    Position, GOAL, START,
};
use maze_core::{seed_number, MAZE_HEIGHT, MAZE_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "daily-maze", about = "Inspect the daily maze from the terminal")]
struct Cli {
    /// Pretend it is this instant (RFC 3339, e.g. 2025-08-04T09:00:00+08:00)
    #[arg(long, global = true)]
    at: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print today's seed and maze number
    Seed,

    /// Draw a maze
    Maze {
        /// Day seed such as 2025-8-4 (defaults to today)
        #[arg(long)]
        seed: Option<String>,
    },

    /// Replay a newest-first move token and draw the result
    Replay {
        /// Move token, e.g. "dsw" for w, then s, then d
        token: String,

        /// Day seed such as 2025-8-4 (defaults to today)
        #[arg(long)]
        seed: Option<String>,
    },

    /// Print the scene JSON for a request path
    Scene {
        /// Request path, e.g. /dswi.webp
        path: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let now = match cli.at.as_deref() {
        Some(at) => parse_instant(at).context("parsing --at")?,
        None => Utc::now(),
    };

    match cli.command {
        Command::Seed => seed_command(now),
        Command::Maze { seed } => maze_command(seed.unwrap_or_else(|| today_seed(now))),
        Command::Replay { token, seed } => {
            replay_command(&token, seed.unwrap_or_else(|| today_seed(now)))
        }
        Command::Scene { path, pretty } => scene_command(&path, now, pretty)?,
    }

    Ok(())
}

fn seed_command(now: DateTime<Utc>) {
    let seed = today_seed(now);
    println!("📅 Daily maze");
    println!("  Seed: {}", seed);
    println!("  Numeric seed: {}", seed_number(&seed));
    println!("  Maze number: {}", maze_number(now));
}

fn maze_command(seed: String) {
    let maze = Maze::generate(&seed);
    println!("🧩 Maze for {} ({}x{} cells)", seed, MAZE_WIDTH, MAZE_HEIGHT);
    println!();
    print!("{}", draw_board(&maze, None));
}

fn replay_command(token: &str, seed: String) {
    let moves = parse_moves(&format!("/{}i.webp", token));
    let maze = Maze::generate(&seed);
    let outcome = replay(&moves, &maze);

    println!("🎮 Replaying {} moves on {}", moves.len(), seed);
    println!();
    print!("{}", draw_board(&maze, Some(outcome.position)));
    println!();
    println!("  Position: ({}, {})", outcome.position.x, outcome.position.y);
    println!(
        "  Goal reached: {}",
        if outcome.reached_goal { "Yes ✓" } else { "No ✗" }
    );
    println!("  Share path: {}", moves_path(&moves));
    println!("{}", "=".repeat(MAZE_WIDTH));
}

fn scene_command(path: &str, now: DateTime<Utc>, pretty: bool) -> Result<()> {
    let scene = build_scene(path, now);
    let json = if pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        serde_json::to_string(&scene)
    }
    .context("serialising scene")?;
    println!("{}", json);
    Ok(())
}

/// Text picture of the maze: `#` wall, space path, `S` start, `G` goal, `@` player
fn draw_board(maze: &Maze, player: Option<Position>) -> String {
    let mut out = String::with_capacity((MAZE_WIDTH + 1) * MAZE_HEIGHT);
    for (y, row) in maze.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let here = Position::new(x, y);
            let ch = if Some(here) == player {
                '@'
            } else if here == GOAL {
                'G'
            } else if here == START {
                'S'
            } else if cell == 1 {
                ' '
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
