//! 難易度ごとの手の選び方。
//!
//! どの関数も候補手（行優先の順）を受け取り、盤面には触れない。

use crate::ai::types::Difficulty;
use crate::engine::board::Candidate;
use rand::Rng;
use rand::seq::IndexedRandom as _;

/// 難易度に応じて候補手から1手を選ぶ。候補が空なら `None`。
#[inline]
pub fn choose<'moves, R: Rng + ?Sized>(
    difficulty: Difficulty,
    candidates: &'moves [Candidate],
    rng: &mut R,
) -> Option<&'moves Candidate> {
    match difficulty {
        Difficulty::Easy => pick_random(candidates, rng),
        Difficulty::Hard => pick_corner_first(candidates),
        Difficulty::Normal => pick_max_flips(candidates),
    }
}

/// 走査順で最初の角を選ぶ。角が無ければ [`pick_max_flips`]。
///
/// 複数の角が打てても反転数は比べない。
#[inline]
#[must_use]
pub fn pick_corner_first(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .find(|candidate| candidate.coord.is_corner())
        .or_else(|| pick_max_flips(candidates))
}

/// 反転数が最大の手を選ぶ。同数なら走査順で先の手。
#[inline]
#[must_use]
pub fn pick_max_flips(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates {
        let better = best.is_none_or(|current| candidate.flips.len() > current.flips.len());
        if better {
            best = Some(candidate);
        }
    }
    best
}

/// 候補手から一様ランダムに選ぶ。
#[inline]
pub fn pick_random<'moves, R: Rng + ?Sized>(
    candidates: &'moves [Candidate],
    rng: &mut R,
) -> Option<&'moves Candidate> {
    candidates.choose(rng)
}
