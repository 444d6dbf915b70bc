/// 難易度ごとの選択方針。
pub mod policy;
/// 難易度に応じて手を選び、盤面に適用するAI。
pub mod selector;
pub mod types;

pub type Move = types::Move;
pub type Difficulty = types::Difficulty;
pub type MoveSelector = selector::MoveSelector;
