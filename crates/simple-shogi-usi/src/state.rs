use simple_shogi_core::Position;

/// 探索深さの上限（USIオプション `Depth` の max）
pub const MAX_DEPTH: u32 = 8;

#[derive(Clone, Debug)]
pub struct UsiOptions {
    /// `go` で深さが指定されなかったときの探索深さ
    pub depth: u32,
}

/// エンジンの状態
#[derive(Debug)]
pub struct EngineState {
    pub opts: UsiOptions,
    pub position: Position,
}

impl EngineState {
    pub fn new(depth: u32) -> Self {
        EngineState {
            opts: UsiOptions {
                depth: depth.clamp(1, MAX_DEPTH),
            },
            position: Position::startpos(),
        }
    }
}
