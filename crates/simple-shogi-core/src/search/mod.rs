//! 探索
//!
//! 固定深さの negamax。枝刈り・指し手の並べ替え・置換表は持たない。

mod negamax;

pub use negamax::{search, SearchResult, Searcher};
