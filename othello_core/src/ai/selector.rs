use crate::ai::policy;
use crate::ai::types::{Ai, Difficulty, Move};
use crate::engine::board::Board;
use crate::engine::types::Side;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use tracing::trace;

/// コンピュータ側の手を難易度に応じて選び、盤面に適用する。
///
/// 手番・難易度・乱数生成器以外の状態は持たない。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MoveSelector {
    /// 難易度。
    difficulty: Difficulty,
    /// `Easy` が使う乱数生成器。
    rng: StdRng,
    /// 受け持つ手番。
    side: Side,
}

impl MoveSelector {
    /// 難易度を返す。
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// `seed` を用いて初期化する（`Easy` の乱数を再現可能にする）。
    #[inline]
    #[must_use]
    pub fn new(side: Side, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
            side,
        }
    }

    /// 盤面を変えずに次の手を選ぶ。
    #[inline]
    pub fn select(&mut self, board: &Board) -> Move {
        let candidates = board.legal_moves(self.side);
        trace!(
            side = %self.side,
            difficulty = %self.difficulty,
            candidates = candidates.len(),
            "selecting move"
        );

        policy::choose(self.difficulty, &candidates, &mut self.rng)
            .map_or(Move::Pass, |candidate| Move::Place(candidate.coord))
    }
}

impl Ai for MoveSelector {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Move {
        self.select(board)
    }

    #[inline]
    fn side(&self) -> Side {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::MoveSelector;
    use crate::ai::types::Ai as _;
    use crate::ai::types::{Difficulty, Move};
    use crate::engine::board::{Board, Grid};
    use crate::engine::types::{Cell, Coord, Side};

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap_or_else(|| unreachable!("test coordinate off board"))
    }

    fn put(grid: &mut Grid, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = grid.get_mut(row).and_then(|line| line.get_mut(col)) {
            *slot = cell;
        }
    }

    /// 白が (0,0) の角を取れる盤面。角以外に反転数の多い手も用意する。
    fn corner_bait() -> Board {
        let mut grid: Grid = [[Cell::Dark; 8]; 8];
        put(&mut grid, 0, 0, Cell::Empty);
        put(&mut grid, 0, 2, Cell::Light);
        // 角以外の候補: (5,0) の下に白、(5,0)→(5,7) 方向に黒6つを挟む白。
        put(&mut grid, 5, 0, Cell::Empty);
        put(&mut grid, 5, 7, Cell::Light);
        Board::from_rows(grid)
    }

    /// 白の合法手が (2,2)=1, (4,2)=1, (5,4)=2 枚の反転になる盤面。
    fn unique_max_board() -> Board {
        let mut board = Board::initial();
        assert!(board.place_stone(at(2, 3), Side::Dark));
        assert!(board.place_stone(at(2, 4), Side::Light));
        assert!(board.place_stone(at(4, 5), Side::Dark));
        board
    }

    #[test]
    fn easy_places_a_light_stone_on_the_initial_board() {
        for seed in 0_u64..16 {
            let mut board = Board::initial();
            let mut ai = MoveSelector::new(Side::Light, Difficulty::Easy, seed);
            assert_eq!(ai.difficulty(), Difficulty::Easy);
            let mv = ai.make_move(&mut board);

            assert!(matches!(mv, Move::Place(_)), "seed={seed} mv={mv:?}");
            let (_, light) = board.count_pieces();
            assert!(light > 2, "seed={seed} light={light}");
        }
    }

    #[test]
    fn easy_is_reproducible_for_a_seed() {
        let board = Board::initial();
        let mut first = MoveSelector::new(Side::Dark, Difficulty::Easy, 99);
        let mut second = MoveSelector::new(Side::Dark, Difficulty::Easy, 99);
        for _draw in 0_u8..8 {
            assert_eq!(first.select(&board), second.select(&board));
        }
    }

    #[test]
    fn normal_picks_the_unique_maximum_every_time() {
        let board = unique_max_board();
        let candidates = board.legal_moves(Side::Light);
        let best = candidates
            .iter()
            .map(|candidate| candidate.flips.len())
            .max()
            .unwrap_or_default();
        let winners: Vec<Coord> = candidates
            .iter()
            .filter(|candidate| candidate.flips.len() == best)
            .map(|candidate| candidate.coord)
            .collect();
        let expected = at(5, 4);
        assert_eq!(winners, vec![expected], "setup must have a unique maximum");

        for seed in 0_u64..5 {
            let mut copy = board;
            let mut ai = MoveSelector::new(Side::Light, Difficulty::Normal, seed);
            assert_eq!(ai.make_move(&mut copy), Move::Place(expected));
            assert_eq!(copy.cell(expected), Cell::Light);
        }
    }

    #[test]
    fn hard_takes_the_corner_over_bigger_flips() {
        let mut board = corner_bait();
        let corner = board.flippable_stones(at(0, 0), Side::Light).len();
        let side_edge = board.flippable_stones(at(5, 0), Side::Light).len();
        assert!(side_edge > corner, "corner={corner} side_edge={side_edge}");

        let mut ai = MoveSelector::new(Side::Light, Difficulty::Hard, 0);
        assert_eq!(ai.make_move(&mut board), Move::Place(at(0, 0)));
        assert_eq!(board.cell(at(0, 0)), Cell::Light);
        assert_eq!(board.cell(at(0, 1)), Cell::Light);
    }

    #[test]
    fn normal_ignores_the_corner_when_it_flips_less() {
        let mut board = corner_bait();
        let mut ai = MoveSelector::new(Side::Light, Difficulty::Normal, 0);
        assert_eq!(ai.make_move(&mut board), Move::Place(at(5, 0)));
    }

    #[test]
    fn no_legal_move_leaves_the_board_untouched() {
        let mut board = Board::from_rows([[Cell::Dark; 8]; 8]);
        let before = board;
        for level in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mut ai = MoveSelector::new(Side::Light, level, 1);
            assert_eq!(ai.make_move(&mut board), Move::Pass);
            assert_eq!(board, before);
        }
    }
}
