use crate::ai::selector::MoveSelector;
use crate::ai::types::Difficulty;
use crate::engine::game::{Game, PlayError, Turn};
use crate::engine::types::Side;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 人間が打ってからAIが打つまでの既定の待ち時間。
const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

/// 1対局分の設定。対局開始後は変更しない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct SessionConfig {
    /// 人間の着手からAIの着手までの待ち時間。
    pub ai_delay: Duration,
    /// AIの難易度。
    pub difficulty: Difficulty,
    /// 人間側の色（AIはその相手）。
    pub human: Side,
    /// AIの乱数シード。
    pub seed: u64,
}

impl SessionConfig {
    /// 難易度だけ指定し、残りは既定値で生成する。
    #[inline]
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    #[inline]
    fn default() -> Self {
        Self {
            ai_delay: DEFAULT_AI_DELAY,
            difficulty: Difficulty::default(),
            human: Side::Dark,
            seed: u64::MIN,
        }
    }
}

/// 人間対コンピュータの対局。
///
/// AIの着手は「期限付きの予約」として保持し、[`Session::tick`] で期限を過ぎたときに
/// 一度だけ実行する。予約は同時に1つまでで、終局すると取り消される。
#[derive(Debug)]
pub struct Session {
    /// コンピュータ側。
    ai: MoveSelector,
    /// 対局設定。
    config: SessionConfig,
    /// ゲーム進行。
    game: Game,
    /// 予約中のAI着手の期限。
    pending: Option<Instant>,
}

impl Session {
    /// 対局設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// ゲーム進行を返す。
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// 現在AIの手番かを返す。
    #[inline]
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_game_over() && self.game.side_to_move() != self.config.human
    }

    /// 対局を開始する。AIが先手なら `now` を起点に着手を予約する。
    #[inline]
    #[must_use]
    pub fn new(config: SessionConfig, now: Instant) -> Self {
        Self::start(config, Game::initial(), now)
    }

    /// 予約中のAI着手の期限を返す。
    #[inline]
    #[must_use]
    pub const fn pending_deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// 人間の着手を適用する。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::NotYourTurn`: AIの手番の場合
    /// - `PlayError::OutOfBounds` / `PlayError::IllegalMove`: 着手できないマスの場合
    ///
    #[inline]
    pub fn play_human(&mut self, row: isize, col: isize, now: Instant) -> Result<Turn, PlayError> {
        if self.game.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if self.is_computer_turn() {
            return Err(PlayError::NotYourTurn);
        }

        let turn = match self.game.play(row, col) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        self.reschedule(now);
        Ok(turn)
    }

    /// AIの手番なら予約を入れ、終局していれば予約を取り消す。
    fn reschedule(&mut self, now: Instant) {
        if self.game.is_game_over() {
            self.pending = None;
            return;
        }

        if self.is_computer_turn() && self.pending.is_none() {
            let deadline = now.checked_add(self.config.ai_delay).unwrap_or(now);
            debug!(delay = ?self.config.ai_delay, "computer move scheduled");
            self.pending = Some(deadline);
        }
    }

    /// `game` の局面から対局を始める。
    fn start(config: SessionConfig, game: Game, now: Instant) -> Self {
        let ai = MoveSelector::new(config.human.opponent(), config.difficulty, config.seed);
        let mut session = Self {
            ai,
            config,
            game,
            pending: None,
        };
        session.reschedule(now);
        session
    }

    /// 任意の局面から対局を始める（テスト用）。
    #[cfg(test)]
    pub(crate) fn from_game(config: SessionConfig, game: Game, now: Instant) -> Self {
        Self::start(config, game, now)
    }

    /// 予約中のAI着手の期限を過ぎていれば、それを一度だけ実行する。
    ///
    /// 実行しなかった場合は `None`。
    #[inline]
    pub fn tick(&mut self, now: Instant) -> Option<Turn> {
        let Some(deadline) = self.pending else {
            return None;
        };
        if now < deadline {
            return None;
        }

        self.pending = None;
        let result = self.game.play_computer(&mut self.ai);
        self.reschedule(now);

        match result {
            Ok(turn) => Some(turn),
            Err(err) => {
                warn!(%err, "scheduled computer move did not play");
                None
            }
        }
    }
}
