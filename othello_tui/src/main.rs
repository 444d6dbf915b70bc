//! 端末で動作する最小 UI。

use othello_core::ai;
use othello_core::engine;
use othello_core::session::{Session, SessionConfig};
use std::io::{self, BufRead, Write as _};
use std::time::Instant;
use tracing::{error, info};

/// 1行の入力が表す操作。
#[derive(Debug, Eq, PartialEq)]
enum Command {
    /// 指定マスに打つ。
    Play(isize, isize),
    /// 終了する。
    Quit,
}

/// `row col`（空白またはカンマ区切り）か `q` を解釈する。
fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Some(Command::Quit);
    }

    let mut parts = trimmed
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse::<isize>().ok()?;
    let col = parts.next()?.parse::<isize>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(Command::Play(row, col))
}

/// 手番と石数（終局後は勝敗）を1行で返す。
fn status_text(session: &Session) -> String {
    let game = session.game();
    let (dark, light) = game.board().count_pieces();

    match game.outcome() {
        Some(engine::Outcome::Winner(engine::Side::Dark)) => {
            format!("Game Over: Dark wins | X={dark} O={light}")
        }
        Some(engine::Outcome::Winner(_)) => {
            format!("Game Over: Light wins | X={dark} O={light}")
        }
        Some(_) => format!("Game Over: Draw | X={dark} O={light}"),
        None => {
            let side = game.side_to_move();
            let who = if session.is_computer_turn() {
                "computer"
            } else {
                "you"
            };
            format!("{side} ({who}) to move | X={dark} O={light}")
        }
    }
}

/// 盤面と状態を表示する。
fn draw(out: &mut impl io::Write, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", session.game().board())?;
    writeln!(out, "{}", status_text(session))?;
    out.flush()
}

/// AIの着手後の盤面を表示し、人間がパスになったときはそれを伝える。
fn report_computer_move(
    out: &mut impl io::Write,
    session: &Session,
    turn: Option<engine::Turn>,
) -> io::Result<()> {
    match turn {
        Some(engine::Turn::Passed) => {
            draw(out, session)?;
            writeln!(out, "You have no legal move; the computer plays again.")
        }
        Some(_) => draw(out, session),
        None => Ok(()),
    }
}

/// 難易度を選ばせる。入力が尽きたら `None`。
fn select_difficulty(
    input: &mut impl BufRead,
    out: &mut impl io::Write,
) -> io::Result<Option<ai::Difficulty>> {
    loop {
        write!(out, "Select AI difficulty [1] easy [2] normal [3] hard: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.parse::<ai::Difficulty>() {
            Ok(level) => return Ok(Some(level)),
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

/// 1局を最後まで進める。
fn run(input: &mut impl BufRead, out: &mut impl io::Write) -> io::Result<()> {
    let Some(difficulty) = select_difficulty(input, out)? else {
        return Ok(());
    };

    let mut session = Session::new(SessionConfig::with_difficulty(difficulty), Instant::now());
    let config = session.config();
    info!(difficulty = %config.difficulty, human = %config.human, "session started");
    draw(out, &session)?;

    while !session.game().is_game_over() {
        if let Some(deadline) = session.pending_deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            std::thread::sleep(wait);
            let turn = session.tick(Instant::now());
            report_computer_move(out, &session, turn)?;
            continue;
        }

        write!(out, "row col (q to quit)> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Play(row, col)) => match session.play_human(row, col, Instant::now()) {
                Ok(engine::Turn::Passed) => {
                    draw(out, &session)?;
                    writeln!(out, "The computer cannot move; play again.")?;
                }
                Ok(_) => draw(out, &session)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            None => writeln!(out, "enter a row and a column between 0 and 7, e.g. `2 3`")?,
        }
    }

    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(&mut stdin.lock(), &mut stdout.lock());
    if let Err(err) = &result {
        error!(%err, "terminal session failed");
    }
    result
}
