//! Heuristic pattern extractor for scorecard pages.
//!
//! Source pages have no stable markup, so nothing here parses structure.
//! Each field of [`MatchState`] is located by its own [`FieldRule`]: a pure
//! function from page text to an optional value, paired with a fixed default.
//! A rule that finds nothing costs only its own field; the other fields are
//! still extracted. [`extract`] therefore never fails.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Ball, MatchState};

pub const DEFAULT_SCORE: &str = "0-0 (0.0)";
pub const DEFAULT_CRR: &str = "0.00";
pub const DEFAULT_BATSMEN: [&str; 2] = ["Batter 1 0(0)", "Batter 2 0(0)"];
pub const DEFAULT_BOWLER: &str = "Bowler 0-0 (0)";

/// Maximum number of recent deliveries reported.
pub const MAX_RECENT_BALLS: usize = 6;

// ── Patterns ─────────────────────────────────────────────────────────────────

/// Player name: capital first letter, then letters, apostrophes, periods,
/// hyphens and spaces. Bounded so a match cannot run across a whole line.
const NAME: &str = r"[A-Z][A-Za-z'.\- ]{1,28}";

/// `45-2 (6.3)` or `45/2 (6.3)`.
static SCORE_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-/]\s*(\d+)\s*\(\s*(\d+\.\d)\s*\)").expect("score regex is valid")
});

/// `45-2/6.3` or `45/2 6.3`.
static SCORE_FLAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-/]\s*(\d+)\s*[/ ]\s*(\d+\.\d)\b").expect("flat score regex is valid")
});

static CRR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:CRR|RR)\s*:?\s*(\d+\.\d{1,2})\b").expect("run rate regex is valid")
});

/// `Ranchhod R 12(9)`.
static BATSMAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})\s+(\d+)\s*\(\s*(\d+)\s*\)")).expect("batsman regex is valid")
});

/// `Meer Khan 0-12 (2)`.
static BOWLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})\s+(\d+)\s*-\s*(\d+)\s*\(\s*(\d+)\s*\)"))
        .expect("bowler regex is valid")
});

// ── Rules ────────────────────────────────────────────────────────────────────

/// One field of the match state: find it in page text, or fall back.
pub trait FieldRule {
    type Value;

    /// Locate the field. `None` when the page has no recognisable match.
    fn find(&self, text: &str) -> Option<Self::Value>;

    /// Value used when [`find`](Self::find) comes back empty.
    fn default_value(&self) -> Self::Value;

    fn extract_or_default(&self, text: &str) -> Self::Value {
        self.find(text).unwrap_or_else(|| self.default_value())
    }
}

/// Innings score, normalised to `"<runs>-<wickets> (<overs>)"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreRule;

impl FieldRule for ScoreRule {
    type Value = String;

    fn find(&self, text: &str) -> Option<String> {
        let caps = SCORE_PAREN_RE
            .captures(text)
            .or_else(|| SCORE_FLAT_RE.captures(text))?;
        Some(format!("{}-{} ({})", &caps[1], &caps[2], &caps[3]))
    }

    fn default_value(&self) -> String {
        DEFAULT_SCORE.to_string()
    }
}

/// Current run rate, labelled `CRR` or `RR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunRateRule;

impl FieldRule for RunRateRule {
    type Value = String;

    fn find(&self, text: &str) -> Option<String> {
        CRR_RE.captures(text).map(|caps| caps[1].to_string())
    }

    fn default_value(&self) -> String {
        DEFAULT_CRR.to_string()
    }
}

/// The two batsmen at the crease, as `"<Name> <runs>(<balls>)"`.
///
/// Takes the first two distinct names in page order; a single hit is padded
/// with the second placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatsmenRule;

impl FieldRule for BatsmenRule {
    type Value = [String; 2];

    fn find(&self, text: &str) -> Option<[String; 2]> {
        let mut seen = HashSet::new();
        let mut found: Vec<String> = Vec::with_capacity(2);

        for caps in BATSMAN_RE.captures_iter(text) {
            let name = normalize_name(&caps[1]);
            if !seen.insert(name.clone()) {
                continue;
            }
            found.push(format!("{name} {}({})", &caps[2], &caps[3]));
            if found.len() == 2 {
                break;
            }
        }

        let mut found = found.into_iter();
        let first = found.next()?;
        let second = found
            .next()
            .unwrap_or_else(|| DEFAULT_BATSMEN[1].to_string());
        Some([first, second])
    }

    fn default_value(&self) -> [String; 2] {
        DEFAULT_BATSMEN.map(str::to_string)
    }
}

/// Current bowler, as `"<Name> <runs>-<wickets> (<overs>)"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BowlerRule;

impl FieldRule for BowlerRule {
    type Value = String;

    fn find(&self, text: &str) -> Option<String> {
        let caps = BOWLER_RE.captures(text)?;
        Some(format!(
            "{} {}-{} ({})",
            normalize_name(&caps[1]),
            &caps[2],
            &caps[3],
            &caps[4]
        ))
    }

    fn default_value(&self) -> String {
        DEFAULT_BOWLER.to_string()
    }
}

/// Up to six recent deliveries in page order.
///
/// A delivery is a lone `•`, `.`, `W` or `0`-`6`. Digits touching another
/// digit belong to a longer number and are skipped, as is a `W` touching a
/// letter.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecentBallsRule;

impl FieldRule for RecentBallsRule {
    type Value = Vec<Ball>;

    fn find(&self, text: &str) -> Option<Vec<Ball>> {
        let chars: Vec<char> = text.chars().collect();
        let mut balls = Vec::with_capacity(MAX_RECENT_BALLS);

        for (i, &c) in chars.iter().enumerate() {
            let Some(ball) = Ball::from_symbol(c) else {
                continue;
            };
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();

            if touches(prev, next, |n| n.is_ascii_digit()) {
                continue;
            }
            if ball == Ball::Wicket && touches(prev, next, char::is_alphabetic) {
                continue;
            }

            balls.push(ball);
            if balls.len() == MAX_RECENT_BALLS {
                break;
            }
        }

        (!balls.is_empty()).then_some(balls)
    }

    fn default_value(&self) -> Vec<Ball> {
        vec![Ball::Dot; MAX_RECENT_BALLS]
    }
}

fn touches(prev: Option<char>, next: Option<char>, pred: impl Fn(char) -> bool) -> bool {
    prev.is_some_and(&pred) || next.is_some_and(&pred)
}

/// Trim and collapse runs of spaces inside a matched name.
fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Entry point ──────────────────────────────────────────────────────────────

/// Extract a complete match state from raw page text.
///
/// Never fails: every field the page does not yield is defaulted.
pub fn extract(page_text: &str) -> MatchState {
    let [batsman1, batsman2] = BatsmenRule.extract_or_default(page_text);

    MatchState {
        batsman1,
        batsman2,
        score: ScoreRule.extract_or_default(page_text),
        bowler: BowlerRule.extract_or_default(page_text),
        crr: RunRateRule.extract_or_default(page_text),
        balls: RecentBallsRule.extract_or_default(page_text),
    }
}

impl Default for MatchState {
    fn default() -> Self {
        let [batsman1, batsman2] = BatsmenRule.default_value();
        Self {
            batsman1,
            batsman2,
            score: ScoreRule.default_value(),
            bowler: BowlerRule.default_value(),
            crr: RunRateRule.default_value(),
            balls: RecentBallsRule.default_value(),
        }
    }
}
