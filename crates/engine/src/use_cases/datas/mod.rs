//! Game datas use cases.
//!
//! Loads every data file of a project into its registry.

mod game_datas;

pub use game_datas::{GameDatas, GameDatasError, KindSummary};
