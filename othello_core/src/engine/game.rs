use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::{Coord, Side};
use tracing::{debug, info};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方とも打てない）。
    GameOver {
        /// 黒の石数。
        dark: u32,
        /// 白の石数。
        light: u32,
    },
    /// 進行中。
    InProgress,
}

/// 終局時の勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け（石数が同じ）。
    Draw,
    /// 石数の多い側の勝ち。
    Winner(Side),
}

/// 着手後の手番の進み方。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Turn {
    /// 双方とも打てないので終局。
    GameOver,
    /// 相手が打てないので同じ側がもう一度打つ。
    Passed,
    /// 相手に手番が移った。
    Switched,
}

/// 着手に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 反転する石が無い（空きマスでない場合を含む）。
    IllegalMove,
    /// AIが打てる手を見つけられなかった。
    NoLegalMove,
    /// 手番ではない側が打とうとした。
    NotYourTurn,
    /// 盤外の座標。
    OutOfBounds,
}

impl core::fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match *self {
            Self::GameOver => "the game is already over",
            Self::IllegalMove => "no stones would be flipped there",
            Self::NoLegalMove => "there is no legal move to play",
            Self::NotYourTurn => "it is not your turn",
            Self::OutOfBounds => "that cell is off the board",
        };
        f.write_str(message)
    }
}

impl core::error::Error for PlayError {}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 終局フラグ。
    game_over: bool,
    /// 手番。
    side_to_move: Side,
}

impl Game {
    /// 着手した側 `mover` の次の手番を決める。
    ///
    /// 相手が打てるか → 自分が打てるか → 終局、の順に判定する。
    fn advance_turn(&mut self, mover: Side) -> Turn {
        let opponent = mover.opponent();
        let turn = if self.board.has_valid_move(opponent) {
            self.side_to_move = opponent;
            Turn::Switched
        } else if self.board.has_valid_move(mover) {
            self.side_to_move = mover;
            Turn::Passed
        } else {
            self.game_over = true;
            Turn::GameOver
        };

        debug!(%mover, next = %self.side_to_move, ?turn, "turn advanced");
        if turn == Turn::GameOver {
            let (dark, light) = self.board.count_pieces();
            info!(dark, light, outcome = ?self.outcome(), "game over");
        }

        turn
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面から `side_to_move` の手番でゲームを始める。
    ///
    /// `side_to_move` が打てず相手が打てる場合は相手の手番から始める。
    /// どちらも打てなければ終局済みとして扱う。
    #[inline]
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut game = Self {
            board,
            game_over: false,
            side_to_move,
        };

        let opponent = side_to_move.opponent();
        if board.has_valid_move(side_to_move) {
            return game;
        }

        if board.has_valid_move(opponent) {
            debug!(
                requested = %side_to_move,
                start = %opponent,
                "setup position starts with a pass"
            );
            game.side_to_move = opponent;
        } else {
            debug!("setup position is already terminal");
            game.game_over = true;
        }

        game
    }

    /// 初期局面（黒番）からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            game_over: false,
            side_to_move: Side::Dark,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// 終局していれば勝敗を返す。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }

        let (dark, light) = self.board.count_pieces();
        let outcome = match dark.cmp(&light) {
            core::cmp::Ordering::Greater => Outcome::Winner(Side::Dark),
            core::cmp::Ordering::Less => Outcome::Winner(Side::Light),
            core::cmp::Ordering::Equal => Outcome::Draw,
        };
        Some(outcome)
    }

    /// 入力側から受け取った行・列に現手番の石を置く。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::OutOfBounds`: 行・列が `0..8` に収まらない場合
    /// - `PlayError::IllegalMove`: 反転する石が無い場合
    ///
    #[inline]
    pub fn play(&mut self, row: isize, col: isize) -> Result<Turn, PlayError> {
        if self.game_over {
            return Err(PlayError::GameOver);
        }

        match Coord::from_signed(row, col) {
            Some(coord) => self.play_at(coord),
            None => Err(PlayError::OutOfBounds),
        }
    }

    /// 指定マスに現手番の石を置く。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 反転する石が無い場合
    ///
    #[inline]
    pub fn play_at(&mut self, coord: Coord) -> Result<Turn, PlayError> {
        if self.game_over {
            return Err(PlayError::GameOver);
        }

        let mover = self.side_to_move;
        if !self.board.place_stone(coord, mover) {
            return Err(PlayError::IllegalMove);
        }

        Ok(self.advance_turn(mover))
    }

    /// AIに手を選ばせ、盤面に適用する。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::NotYourTurn`: AIの手番ではない場合
    /// - `PlayError::NoLegalMove`: AIが打てる手が無かった場合（盤面は変わらない）
    ///
    #[inline]
    pub fn play_computer<A: Ai + ?Sized>(&mut self, ai: &mut A) -> Result<Turn, PlayError> {
        if self.game_over {
            return Err(PlayError::GameOver);
        }

        let mover = ai.side();
        if mover != self.side_to_move {
            return Err(PlayError::NotYourTurn);
        }

        match ai.make_move(&mut self.board) {
            Move::Place(_) => Ok(self.advance_turn(mover)),
            Move::Pass => Err(PlayError::NoLegalMove),
        }
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.game_over {
            let (dark, light) = self.board.count_pieces();
            return Status::GameOver { dark, light };
        }

        Status::InProgress
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}
