use crate::engine::board::Board;
use crate::engine::types::{Coord, Side};
use tracing::warn;

/// AIが選択する手。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Move {
    /// パス（合法手が無い）。
    Pass,
    /// 指定マスへ着手。
    Place(Coord),
}

/// 手を選択するAI。
pub trait Ai {
    /// 手を選んで盤面に適用する。
    ///
    /// 合法手が無ければ盤面を変えずに `Move::Pass` を返す。
    /// 盤面の書き換えは1回だけ（パスなら0回）。
    #[inline]
    fn make_move(&mut self, board: &mut Board) -> Move {
        let side = self.side();
        let mv = self.select_move(board);
        if let Move::Place(coord) = mv {
            if !board.place_stone(coord, side) {
                warn!(%side, %coord, "selected move was rejected by the board");
                return Move::Pass;
            }
        }
        mv
    }

    /// 盤面から次の手を選択する（盤面は変更しない）。
    fn select_move(&mut self, board: &Board) -> Move;

    /// このAIが受け持つ手番を返す。
    fn side(&self) -> Side;
}

/// AIの強さ。セッション中は変更しない。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    /// 合法手から一様ランダム。
    Easy,
    /// 角が取れるなら角、それ以外は `Normal` と同じ。
    Hard,
    /// 反転数が最大の手（同数なら走査順で先の手）。
    #[default]
    Normal,
}

/// 難易度文字列の解析に失敗した。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseDifficultyError {
    /// 解析できなかった入力。
    input: String,
}

impl core::fmt::Display for ParseDifficultyError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown difficulty {:?} (expected easy, normal or hard)",
            self.input
        )
    }
}

impl core::error::Error for ParseDifficultyError {}

impl core::fmt::Display for Difficulty {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match *self {
            Self::Easy => "easy",
            Self::Hard => "hard",
            Self::Normal => "normal",
        };
        f.write_str(name)
    }
}

impl core::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// `easy` / `normal` / `hard`（大文字小文字を区別しない）、または `1` / `2` / `3`。
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Self::Easy),
            "2" | "normal" => Ok(Self::Normal),
            "3" | "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError {
                input: trimmed.to_owned(),
            }),
        }
    }
}
