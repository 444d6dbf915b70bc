//! Othello (Reversi) core logic.
//!
//! このクレートは盤面とゲーム進行を管理する `engine`、コンピュータ側の手を選ぶ `ai`、
//! 人間対コンピュータの対局を進める `session` を提供します。
//! UI（`othello_tui`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面・ルール・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// 人間対コンピュータの対局（AIの遅延着手を含む）を提供するモジュール。
pub mod session;
