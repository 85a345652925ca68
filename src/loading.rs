//! Loading-text word-shuffle effect, computed without timers.
//!
//! While a story is being generated the UI shows a grid of multilingual
//! placeholder words that reshuffle periodically, with a few highlighted
//! words cycling through emphasis phases; once the final text arrives its
//! words replace the placeholders one at a time.
//!
//! Everything here is a pure function of `(seed, elapsed time)` plus the
//! reveal-progress counter, so a frame can be recomputed, tested, and
//! rendered by any front end without shared mutable state.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WORDS_PER_LINE: usize = 6;
pub const TOTAL_LINES: usize = 16;
pub const TOTAL_PHASES: u64 = 8;
pub const HIGHLIGHT_WALKERS: usize = 3;
/// How often the placeholder grid reshuffles.
pub const SHUFFLE_INTERVAL_MS: u64 = 300;
/// How often one more final word is revealed.
pub const REVEAL_INTERVAL_MS: u64 = 100;

/// Multilingual placeholder vocabulary the shuffle draws from.
const WORD_BANK: &[&str] = &[
    "imaginaci\u{f3}n",
    "cr\u{e9}ativit\u{e9}",
    "fantas\u{ed}a",
    "sogni",
    "magie",
    "aventura",
    "cuento",
    "f\u{e1}bula",
    "leyenda",
    "mythos",
    "h\u{e9}roe",
    "dragon",
    "fee",
    "elfo",
    "unicornio",
    "ch\u{e2}teau",
    "bosque",
    "oceano",
    "estrella",
    "luna",
    "sun",
    "viaggio",
    "descubrimiento",
    "myst\u{e8}re",
    "enigma",
    "portal",
    "dimension",
    "universo",
    "galaxie",
    "tiempo",
    "spazio",
    "poder",
    "maravilla",
    "Wunder",
    "inspiraci\u{f3}n",
    "creazione",
    "invenzione",
    "transformaci\u{f3}n",
    "evoluzione",
    "vision",
    "idea",
    "concepto",
    "pensamiento",
    "conscience",
    "alma",
    "spirit",
    "coraz\u{f3}n",
    "passione",
    "emozione",
    "sentimento",
    "amor",
    "amistad",
    "coraggio",
    "hope",
    "wisdom",
    "aprendizaje",
    "progresso",
    "sucesso",
    "logro",
    "triunfo",
    "victoria",
    "conquista",
    "exploraci\u{f3}n",
    "m\u{e1}gico",
    "misterioso",
    "legendario",
    "m\u{ed}tico",
    "epic",
    "heroico",
    "valiente",
    "intr\u{e9}pido",
    "aventurero",
    "visionario",
    "creativo",
    "innovador",
    "original",
    "\u{fa}nico",
    "speciale",
];

/// One highlighted word and its current emphasis phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub line: usize,
    pub word: usize,
    pub phase: u64,
}

/// A rendered frame of the effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingFrame {
    pub lines: Vec<Vec<String>>,
    pub highlights: Vec<Highlight>,
    /// How many final words are shown so far (0 while still shuffling).
    pub revealed_words: usize,
    pub complete: bool,
}

/// The effect's model: a seed plus, eventually, the final text.
#[derive(Debug, Clone)]
pub struct LoadingText {
    seed: u64,
    final_text: Option<String>,
}

impl LoadingText {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            final_text: None,
        }
    }

    /// The generated story arrived; subsequent frames reveal it word by
    /// word. Emphasis markers are stripped before layout.
    pub fn set_final_text(&mut self, text: &str) {
        self.final_text = Some(clean_final_text(text));
    }

    pub fn frame_at(&self, elapsed: Duration) -> LoadingFrame {
        let elapsed_ms = elapsed.as_millis() as u64;
        let tick = elapsed_ms / SHUFFLE_INTERVAL_MS;

        let mut lines = shuffle_grid(self.seed, tick);

        let Some(final_text) = &self.final_text else {
            return LoadingFrame {
                lines,
                highlights: walker_highlights(self.seed, tick),
                revealed_words: 0,
                complete: false,
            };
        };

        let final_lines = layout_lines(final_text);
        let total_words = final_text.split_whitespace().count();
        let revealed = ((elapsed_ms / REVEAL_INTERVAL_MS) as usize).min(total_words);

        // Words past the grid's capacity still count toward the reveal but
        // have no cell to land in.
        let capacity = TOTAL_LINES * WORDS_PER_LINE;
        for index in 0..revealed.min(capacity) {
            let line = index / WORDS_PER_LINE;
            let word = index % WORDS_PER_LINE;
            lines[line][word] = final_lines[line][word].clone();
        }

        let complete = revealed == total_words;
        LoadingFrame {
            lines,
            // Once the reveal finishes the walkers stop.
            highlights: if complete {
                Vec::new()
            } else {
                walker_highlights(self.seed, tick)
            },
            revealed_words: revealed,
            complete,
        }
    }
}

fn clean_final_text(text: &str) -> String {
    text.chars().filter(|c| *c != '*' && *c != '_').collect()
}

/// Split the final text into grid lines: chunks of [`WORDS_PER_LINE`]
/// words, padded with empty cells up to [`TOTAL_LINES`].
fn layout_lines(text: &str) -> Vec<Vec<String>> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    let mut lines: Vec<Vec<String>> = words
        .chunks(WORDS_PER_LINE)
        .map(|chunk| chunk.to_vec())
        .collect();

    while lines.len() < TOTAL_LINES {
        lines.push(vec![String::new(); WORDS_PER_LINE]);
    }

    lines
}

/// The placeholder grid for one shuffle tick. Deterministic in
/// `(seed, tick)`.
fn shuffle_grid(seed: u64, tick: u64) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed ^ tick.wrapping_mul(0x9e37_79b9_7f4a_7c15));

    (0..TOTAL_LINES)
        .map(|_| {
            (0..WORDS_PER_LINE)
                .map(|_| WORD_BANK[rng.gen_range(0..WORD_BANK.len())].to_string())
                .collect()
        })
        .collect()
}

/// Three highlight walkers, phase-shifted a third of a cycle apart. Each
/// walker keeps its grid position for a full phase cycle, then jumps to a
/// position derived from the cycle number.
fn walker_highlights(seed: u64, tick: u64) -> Vec<Highlight> {
    (0..HIGHLIGHT_WALKERS)
        .map(|walker| {
            let shift = walker as u64 * TOTAL_PHASES / HIGHLIGHT_WALKERS as u64;
            let shifted = tick + shift;
            let phase = shifted % TOTAL_PHASES;
            let cycle = shifted / TOTAL_PHASES;

            let mut rng = StdRng::seed_from_u64(
                seed ^ ((walker as u64) << 32) ^ cycle.wrapping_mul(0xd134_2543_de82_ef95),
            );
            Highlight {
                line: rng.gen_range(0..TOTAL_LINES),
                word: rng.gen_range(0..WORDS_PER_LINE),
                phase,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_deterministic_in_seed_and_elapsed() {
        let model = LoadingText::new(7);

        let a = model.frame_at(Duration::from_millis(1234));
        let b = model.frame_at(Duration::from_millis(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn grid_has_fixed_dimensions() {
        let frame = LoadingText::new(1).frame_at(Duration::ZERO);

        assert_eq!(frame.lines.len(), TOTAL_LINES);
        assert!(frame.lines.iter().all(|l| l.len() == WORDS_PER_LINE));
        assert_eq!(frame.highlights.len(), HIGHLIGHT_WALKERS);
        assert_eq!(frame.revealed_words, 0);
        assert!(!frame.complete);
    }

    #[test]
    fn grid_reshuffles_between_ticks() {
        let model = LoadingText::new(42);

        let a = model.frame_at(Duration::from_millis(0));
        let b = model.frame_at(Duration::from_millis(SHUFFLE_INTERVAL_MS));
        assert_ne!(a.lines, b.lines);
    }

    #[test]
    fn reveal_progress_is_monotonic_and_caps() {
        let mut model = LoadingText::new(3);
        model.set_final_text("uno dos tres cuatro");

        let mut previous = 0;
        for ms in (0..2000).step_by(100) {
            let frame = model.frame_at(Duration::from_millis(ms));
            assert!(frame.revealed_words >= previous);
            previous = frame.revealed_words;
        }

        let last = model.frame_at(Duration::from_secs(60));
        assert_eq!(last.revealed_words, 4);
        assert!(last.complete);
        assert!(last.highlights.is_empty());
    }

    #[test]
    fn revealed_words_come_from_the_final_text() {
        let mut model = LoadingText::new(3);
        model.set_final_text("uno dos tres");

        let frame = model.frame_at(Duration::from_millis(2 * REVEAL_INTERVAL_MS));
        assert_eq!(frame.revealed_words, 2);
        assert_eq!(frame.lines[0][0], "uno");
        assert_eq!(frame.lines[0][1], "dos");
    }

    #[test]
    fn emphasis_markers_are_stripped() {
        let mut model = LoadingText::new(3);
        model.set_final_text("*uno* _dos_");

        let frame = model.frame_at(Duration::from_secs(10));
        assert_eq!(frame.lines[0][0], "uno");
        assert_eq!(frame.lines[0][1], "dos");
    }

    #[test]
    fn walker_phases_advance_each_tick() {
        let a = walker_highlights(5, 0);
        let b = walker_highlights(5, 1);

        assert_eq!(b[0].phase, (a[0].phase + 1) % TOTAL_PHASES);
        // Within a cycle the walker's position is stable.
        assert_eq!((a[0].line, a[0].word), (b[0].line, b[0].word));
    }
}
