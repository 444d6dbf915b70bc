use crate::engine::types::{BOARD_LEN, Cell, Coord, DIRECTIONS, Side};
use tracing::debug;

/// 配列長としての盤の一辺の長さ。
const GRID_LEN: usize = BOARD_LEN as usize;

/// 盤面のマス配列（行ごと）。
pub type Grid = [[Cell; GRID_LEN]; GRID_LEN];

/// 初期配置（行, 列, 石）。
const START_STONES: [(u8, u8, Cell); 4] = [
    (3, 3, Cell::Light),
    (3, 4, Cell::Dark),
    (4, 3, Cell::Dark),
    (4, 4, Cell::Light),
];

/// ある手番の合法手1つ分（着手マスと反転する石）。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// 着手マス。
    pub coord: Coord,
    /// 反転する石（方向順、各方向は着手マスに近い順）。
    pub flips: Vec<Coord>,
}

/// 8×8の盤面。
///
/// 盤面を書き換えるのは [`Board::place_stone`] だけ。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 各マスの状態。
    grid: Grid,
}

impl Board {
    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.grid
            .get(usize::from(coord.row()))
            .and_then(|row| row.get(usize::from(coord.col())))
            .copied()
            .unwrap_or_default()
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub fn count_pieces(&self) -> (u32, u32) {
        self.grid
            .iter()
            .flatten()
            .fold((u32::MIN, u32::MIN), |(dark, light), cell| match *cell {
                Cell::Dark => (dark.saturating_add(1), light),
                Cell::Light => (dark, light.saturating_add(1)),
                Cell::Empty => (dark, light),
            })
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> u32 {
        let (dark, light) = self.count_pieces();
        let len = u32::from(BOARD_LEN);
        len.saturating_mul(len)
            .saturating_sub(dark)
            .saturating_sub(light)
    }

    /// 指定マスに `side` が着手したときに反転する石を返す。
    ///
    /// - 空きマスでなければ空を返す
    /// - 8方向を [`DIRECTIONS`] の順に調べ、各方向は着手マスに近い順に並べる
    #[inline]
    #[must_use]
    pub fn flippable_stones(&self, coord: Coord, side: Side) -> Vec<Coord> {
        if self.cell(coord) != Cell::Empty {
            return Vec::new();
        }

        let own = Cell::from(side);
        let opponent = Cell::from(side.opponent());
        let mut flippable = Vec::new();

        for delta in DIRECTIONS {
            let mut path = Vec::new();
            let mut cursor = coord.step(delta);

            while let Some(current) = cursor {
                if self.cell(current) != opponent {
                    break;
                }
                path.push(current);
                cursor = current.step(delta);
            }

            // 盤内で自分の石に行き当たり、間に相手の石がある場合だけ挟める。
            let closed = cursor.is_some_and(|end| self.cell(end) == own);
            if closed && !path.is_empty() {
                flippable.extend(path);
            }
        }

        flippable
    }

    /// 行ごとのマス配列から盤面を生成する。
    ///
    /// 局面の妥当性（初期配置から到達可能か等）は問わない。
    #[inline]
    #[must_use]
    pub const fn from_rows(grid: Grid) -> Self {
        Self { grid }
    }

    /// 指定手番に合法手があるかを返す（最初に見つかった時点で打ち切る）。
    #[inline]
    #[must_use]
    pub fn has_valid_move(&self, side: Side) -> bool {
        Coord::row_major().any(|coord| !self.flippable_stones(coord, side).is_empty())
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut grid = Grid::default();
        for (row, col, cell) in START_STONES {
            if let Some(slot) = grid
                .get_mut(usize::from(row))
                .and_then(|line| line.get_mut(usize::from(col)))
            {
                *slot = cell;
            }
        }

        Self { grid }
    }

    /// 行・列が盤内（どちらも `0..BOARD_LEN`）かを返す。
    #[inline]
    #[must_use]
    pub fn is_on_board(row: isize, col: isize) -> bool {
        let range = 0_isize..isize::from(BOARD_LEN);
        range.contains(&row) && range.contains(&col)
    }

    /// 指定手番の合法手を行優先の順で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Candidate> {
        Coord::row_major()
            .filter_map(|coord| {
                let flips = self.flippable_stones(coord, side);
                if flips.is_empty() {
                    None
                } else {
                    Some(Candidate { coord, flips })
                }
            })
            .collect()
    }

    /// 石を置き、挟んだ石を反転する。
    ///
    /// 反転する石が無ければ盤面を変えずに `false` を返す。
    #[inline]
    pub fn place_stone(&mut self, coord: Coord, side: Side) -> bool {
        let to_flip = self.flippable_stones(coord, side);
        if to_flip.is_empty() {
            return false;
        }

        let own = Cell::from(side);
        for flipped in &to_flip {
            self.set(*flipped, own);
        }
        self.set(coord, own);

        debug!(%side, %coord, flipped = to_flip.len(), "stone placed");
        true
    }

    /// 盤面全体（行ごと）を返す。
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &Grid {
        &self.grid
    }

    /// 指定マスを書き換える。
    fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(slot) = self
            .grid
            .get_mut(usize::from(coord.row()))
            .and_then(|row| row.get_mut(usize::from(coord.col())))
        {
            *slot = cell;
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl core::fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("  0 1 2 3 4 5 6 7")?;
        for (index, row) in self.rows().iter().enumerate() {
            write!(f, "\n{index}")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
