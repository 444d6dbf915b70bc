/// 盤の一辺の長さ。
pub const BOARD_LEN: u8 = 8;

/// 反転を調べる8方向（行の増分, 列の増分）。
///
/// この順序が反転石リストの並び順になる。
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 4隅のマス（行, 列）。
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Side {
    /// 先手（黒）。
    Dark,
    /// 後手（白）。
    Light,
}

impl Side {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl core::fmt::Display for Side {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match *self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        };
        f.write_str(name)
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 黒石。
    Dark,
    /// 空きマス。
    #[default]
    Empty,
    /// 白石。
    Light,
}

impl Cell {
    /// 表示用の1文字を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dark => 'X',
            Self::Empty => '.',
            Self::Light => 'O',
        }
    }
}

impl From<Side> for Cell {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Dark => Self::Dark,
            Side::Light => Self::Light,
        }
    }
}

/// 盤面上のマス（行, 列）。どちらも `0..8` に収まることが保証される。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    /// 列（0..=7）。
    col: u8,
    /// 行（0..=7）。
    row: u8,
}

impl Coord {
    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 4隅のいずれかかを返す。
    #[inline]
    #[must_use]
    pub fn is_corner(self) -> bool {
        CORNERS.contains(&(self.row, self.col))
    }

    /// 行・列から `Coord` を生成する。盤外なら `None`。
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= BOARD_LEN || col >= BOARD_LEN {
            return None;
        }

        Some(Self { col, row })
    }

    /// 符号付きの行・列から `Coord` を生成する。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        let row_u8 = match u8::try_from(row) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };
        let col_u8 = match u8::try_from(col) {
            Ok(value) => value,
            Err(_conversion_error) => return None,
        };

        Self::new(row_u8, col_u8)
    }

    /// 行優先で並べた全64マスを返す。
    #[inline]
    pub fn row_major() -> impl Iterator<Item = Self> {
        (u8::MIN..BOARD_LEN)
            .flat_map(|row| (u8::MIN..BOARD_LEN).map(move |col| Self { col, row }))
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// `(行の増分, 列の増分)` だけ進めたマスを返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn step(self, delta: (isize, isize)) -> Option<Self> {
        let (d_row, d_col) = delta;
        let row = isize::from(self.row).checked_add(d_row);
        let col = isize::from(self.col).checked_add(d_col);

        match (row, col) {
            (Some(next_row), Some(next_col)) => Self::from_signed(next_row, next_col),
            _ => None,
        }
    }
}

impl core::fmt::Display for Coord {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Coord, Side};

    #[test]
    fn opponent_is_the_other_side() {
        assert_eq!(Side::Dark.opponent(), Side::Light);
        assert_eq!(Side::Light.opponent(), Side::Dark);
        assert_eq!(Side::Dark.opponent().opponent(), Side::Dark);
    }

    #[test]
    fn coord_rejects_off_board_values() {
        assert!(Coord::new(7, 7).is_some());
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert!(Coord::from_signed(-1, 3).is_none());
        assert!(Coord::from_signed(3, 300).is_none());
    }

    #[test]
    fn step_stops_at_the_edge() {
        let origin = Coord::new(0, 0).unwrap_or_else(|| unreachable!());
        assert_eq!(origin.step((-1, 0)), None);
        assert_eq!(origin.step((1, 1)), Coord::new(1, 1));
    }

    #[test]
    fn row_major_covers_every_cell_once_in_order() {
        let all: Vec<Coord> = Coord::row_major().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all.first().copied(), Coord::new(0, 0));
        assert_eq!(all.get(1).copied(), Coord::new(0, 1));
        assert_eq!(all.get(8).copied(), Coord::new(1, 0));
        assert_eq!(all.last().copied(), Coord::new(7, 7));
    }

    #[test]
    fn corners_are_detected() {
        let corners = Coord::row_major().filter(|coord| coord.is_corner()).count();
        assert_eq!(corners, 4);
        assert_eq!(Cell::from(Side::Light), Cell::Light);
    }
}
