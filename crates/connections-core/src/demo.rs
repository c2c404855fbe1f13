//! Static demo game, served independently of the cache.
//!
//! Lets the client render a fully enriched board without touching the
//! upstream service or the generation API.

use crate::models::{GameDataResponse, OverallScore, PickupLine, PuzzleCategory, PuzzleDate};

const DEMO_DATE: &str = "2023-10-23";
const DEMO_PUZZLE_ID: i64 = 1;

/// (title, [(word, line, creativity, humor); 4])
type DemoCategory = (&'static str, [(&'static str, &'static str, u8, u8); 4]);

const DEMO_CATEGORIES: [DemoCategory; 4] = [
    (
        "Dishes",
        [
            ("Pie", "Are you a pie? Because I'd love a slice of your time.", 6, 7),
            ("Curry", "You must be curry, because you're making my heart race.", 7, 6),
            ("Sushi", "I'm not saying you're sushi, but I'd roll with you anywhere.", 8, 7),
            ("Tofu", "Are you tofu? You soak up all of my attention.", 7, 5),
        ],
    ),
    (
        "Birds",
        [
            ("Robin", "Are you a robin? Because you just stole my heart.", 6, 6),
            ("Swift", "You're a swift, and I fell for you fast.", 7, 6),
            ("Finch", "I'd never flinch around a finch like you.", 6, 7),
            ("Wren", "Wren can I see you again?", 8, 8),
        ],
    ),
    (
        "Card games",
        [
            ("Snap", "Snap! We're a perfect match.", 5, 6),
            ("Poker", "I'd go all in for you, no bluffing.", 6, 6),
            ("Bridge", "Let's build a bridge between your table and mine.", 7, 5),
            ("Hearts", "Let's play hearts, you've already won mine.", 7, 7),
        ],
    ),
    (
        "___ ball",
        [
            ("Foot", "Put your best foot forward, I'll catch you.", 5, 5),
            ("Snow", "Like a snowball, my feelings just keep growing.", 7, 6),
            ("Meat", "I'd share my last meatball with you.", 6, 8),
            ("Eye", "You're the eyeball of my dreams, I can't look away.", 6, 7),
        ],
    ),
];

/// The fully populated demo puzzle with pickup lines.
pub fn hardcoded_game() -> GameDataResponse {
    let mut data = Vec::with_capacity(DEMO_CATEGORIES.len());
    let mut pickup_lines = Vec::with_capacity(DEMO_CATEGORIES.len());

    for (index, (title, entries)) in DEMO_CATEGORIES.iter().enumerate() {
        data.push(PuzzleCategory {
            category: (*title).to_string(),
            words: entries.iter().map(|(word, ..)| (*word).to_string()).collect(),
            difficulty: index + 1,
        });
        pickup_lines.push(
            entries
                .iter()
                .map(|(word, line, creativity, humor)| PickupLine {
                    word: (*word).to_string(),
                    line: (*line).to_string(),
                    overall_score: OverallScore {
                        creativity: *creativity,
                        humor: *humor,
                    },
                })
                .collect(),
        );
    }

    GameDataResponse {
        date: PuzzleDate::from_static(DEMO_DATE),
        id: DEMO_PUZZLE_ID,
        data,
        pickup_lines,
    }
}
