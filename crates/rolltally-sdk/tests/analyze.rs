use rolltally_sdk::{Error, ExtractOptions, analyze, analyze_bytes};
use rolltally_testing::TranscriptBuilder;
use rolltally_testing::assertions::{assert_invariants, assert_totals};

const PARTICIPANTS: [&str; 5] = ["Alice", "Bob", "KP", "system", "探索者 C"];
const SKILLS: [&str; 4] = ["目星", "聞き耳", "図書館", "回避"];
const LABELS: [&str; 7] = [
    "決定的成功/スペシャル",
    "決定的成功",
    "スペシャル",
    "成功",
    "失敗",
    "致命的失敗",
    "大失敗",
];

/// Deterministic generator so every run sees the same transcripts
struct Lcg(u64);

impl Lcg {
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        items[((self.0 >> 33) as usize) % items.len()]
    }
}

fn generated_transcript(seed: u64, entries: usize) -> String {
    let mut rng = Lcg(seed);
    let mut builder = TranscriptBuilder::new();
    for _ in 0..entries {
        let who = rng.pick(&PARTICIPANTS);
        builder = match rng.pick(&["roll", "roll", "roll", "chat", "short"]) {
            "roll" => builder.roll(who, rng.pick(&SKILLS), rng.pick(&LABELS)),
            "chat" => builder.chat(who, "……"),
            _ => builder.entry(&[who]),
        };
    }
    builder.build()
}

#[test]
fn test_invariants_hold_on_generated_transcripts() {
    for seed in 0..50 {
        let html = generated_transcript(seed, 60);
        match analyze(&html, &ExtractOptions::default()) {
            Ok(analysis) => {
                assert_invariants(&analysis.result)
                    .unwrap_or_else(|e| panic!("seed {}: {:#}", seed, e));
                assert!(!analysis.result.contains("KP"));
                assert!(!analysis.result.contains("system"));
            }
            Err(Error::NoData { .. }) => {}
            Err(e) => panic!("seed {}: unexpected error {}", seed, e),
        }
    }
}

#[test]
fn test_repeat_runs_are_identical() {
    let html = generated_transcript(7, 120);
    let first = analyze(&html, &ExtractOptions::default()).unwrap();
    let second = analyze(&html, &ExtractOptions::default()).unwrap();
    assert_eq!(first.result, second.result);
}

#[test]
fn test_whitespace_variants_of_a_name_merge() {
    let html = TranscriptBuilder::new()
        .roll("探索者 C", "目星", "成功")
        .roll("探索者\u{3000}C", "目星", "決定的成功")
        .roll(" 探索者\n  C ", "目星", "致命的失敗")
        .build();

    let analysis = analyze(&html, &ExtractOptions::default()).unwrap();
    assert_eq!(analysis.result.len(), 1);
    assert_totals(&analysis.result, "探索者 C", (3, 2, 1, 1)).unwrap();
}

#[test]
fn test_valid_document_without_rolls_is_no_data() {
    let html = TranscriptBuilder::new()
        .chat("Alice", "こんばんは")
        .roll("KP", "目星", "成功")
        .build();

    let err = analyze(&html, &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NoData { entries: 2 }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_plain_text_is_parse_failure() {
    let err = analyze("Alice: CCB<=50 【目星】 ＞ 3 ＞ 成功", &ExtractOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_binary_garbage_is_parse_failure() {
    let bytes = [0u8, 159, 146, 150, 0xff];
    assert!(matches!(
        analyze_bytes(&bytes, &ExtractOptions::default()),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_ignoring_everyone_is_no_data() {
    let html = TranscriptBuilder::new()
        .roll("Alice", "目星", "成功")
        .build();

    let options = ExtractOptions::default().ignore(["Alice"]);
    assert!(matches!(analyze(&html, &options), Err(Error::NoData { .. })));
}
