#![allow(dead_code)]

use rolltally_testing::{TestWorld, TranscriptBuilder};
use std::path::PathBuf;

pub const BIN: &str = env!("CARGO_BIN_EXE_rolltally");

/// Alice: 3 rolls (critical 目星, success 図書館, fumble 聞き耳)
/// Bob: 1 failed roll
/// KP and system lines are present but ignored by default
pub fn session() -> TranscriptBuilder {
    TranscriptBuilder::new()
        .roll("KP", "目星", "決定的成功")
        .roll("Alice", "目星", "決定的成功")
        .chat("Bob", "よろしくお願いします")
        .roll("Alice", "図書館", "成功")
        .roll("Bob", "目星", "失敗")
        .roll("Alice", "聞き耳", "致命的失敗")
        .entry(&["system", "[ KP ] がダイスを振りました"])
}

pub fn world_with_session() -> (TestWorld, PathBuf) {
    let world = TestWorld::new();
    let path = world
        .write_transcript("session.html", session().build())
        .expect("write transcript");
    (world, path)
}
