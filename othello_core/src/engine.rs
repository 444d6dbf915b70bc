/// 盤面（8×8のマス配列）と合法手/反転処理の実装。
pub mod board;
/// ゲーム進行（手番、パス、終局判定など）の実装。
pub mod game;
pub mod types;

pub type Board = board::Board;
pub type Candidate = board::Candidate;
pub type Game = game::Game;
pub type Side = types::Side;
pub type Cell = types::Cell;
pub type Coord = types::Coord;
pub type GameStatus = game::Status;
pub type Outcome = game::Outcome;
pub type PlayError = game::PlayError;
pub type Turn = game::Turn;
