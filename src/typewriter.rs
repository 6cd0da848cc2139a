//! Character-by-character reveal of a fixed script.
//!
//! The sequencer is timer agnostic: every transition hands back the next
//! [`Tick`] and the driver is expected to call [`Typewriter::advance`] once
//! that tick's delay has elapsed. Exactly one tick is outstanding at a time,
//! so reveals are strictly ordered. Ticks carry the [`Generation`] they were
//! issued under; [`Typewriter::cancel`] and [`Typewriter::start`] bump it so
//! that callbacks left over from a torn down view are ignored.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub start_delay: Duration,
    /// Minimum delay before each character.
    pub char_delay: Duration,
    /// Upper bound of the random extra added to `char_delay`.
    pub char_jitter: Duration,
    pub line_pause: Duration,
    /// Time the fully typed script stays on screen.
    pub completion_pause: Duration,
    /// Blank time between clearing and typing line 0 again.
    pub restart_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::ZERO,
            char_delay: Duration::from_millis(50),
            char_jitter: Duration::from_millis(30),
            line_pause: Duration::from_millis(200),
            completion_pause: Duration::from_millis(3000),
            restart_delay: Duration::from_millis(1000),
        }
    }
}

impl TypewriterTiming {
    pub fn with_start_delay(self, start_delay: Duration) -> Self {
        Self {
            start_delay,
            ..self
        }
    }

    fn next_char_delay(&self, jitter: &mut impl Jitter) -> Duration {
        let unit = jitter.sample().clamp(0.0, 1.0);
        self.char_delay + self.char_jitter.mul_f64(unit)
    }
}

/// Source of typing irregularity. Samples are expected in `[0, 1)`; values
/// outside are clamped.
pub trait Jitter {
    fn sample(&mut self) -> f64;
}

impl<F: FnMut() -> f64> Jitter for F {
    fn sample(&mut self) -> f64 {
        self()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

/// A deferred step: call [`Typewriter::advance`] with `generation` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub delay: Duration,
    pub generation: Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, cancelled, or waiting out the start delay.
    Idle,
    /// Next tick reveals character `col` of line `line`.
    Revealing { line: usize, col: usize },
    /// `line` is complete; next tick moves on to the following line.
    LinePause { line: usize },
    /// Whole script shown; next tick clears it.
    Completed,
    /// Cleared; next tick starts over at line 0.
    Resetting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: Box<[String]>,
    /// Characters revealed so far, per line.
    revealed: Vec<usize>,
    phase: Phase,
    generation: Generation,
    running: bool,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new<I, S>(script: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = script.into_iter().map(Into::into).collect::<Box<[_]>>();
        let revealed = vec![0; lines.len()];
        Self {
            lines,
            revealed,
            phase: Phase::Idle,
            generation: Generation::default(),
            running: false,
            timing,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> &TypewriterTiming {
        &self.timing
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// (Re)start from a blank display. Returns `None` for an empty script,
    /// which never reveals anything.
    pub fn start(&mut self) -> Option<Tick> {
        self.generation = Generation(self.generation.0 + 1);
        self.clear();
        self.phase = Phase::Idle;
        if self.lines.is_empty() {
            self.running = false;
            return None;
        }
        self.running = true;
        Some(self.tick(self.timing.start_delay))
    }

    /// Invalidate every outstanding tick. The revealed text is left as is.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("typewriter cancelled in phase {:?}", self.phase);
        }
        self.generation = Generation(self.generation.0 + 1);
        self.running = false;
        self.phase = Phase::Idle;
    }

    /// Perform the step `generation` was scheduled for and return the next
    /// one. Stale generations are ignored.
    pub fn advance(&mut self, generation: Generation, jitter: &mut impl Jitter) -> Option<Tick> {
        if !self.running || generation != self.generation {
            return None;
        }
        let (line, col) = match self.phase {
            Phase::Idle | Phase::Resetting => (0, 0),
            Phase::Revealing { line, col } => {
                self.revealed[line] = col + 1;
                (line, col + 1)
            }
            Phase::LinePause { line } => {
                let next = line + 1;
                if next >= self.lines.len() {
                    self.phase = Phase::Completed;
                    return Some(self.tick(self.timing.completion_pause));
                }
                (next, 0)
            }
            Phase::Completed => {
                log::debug!("typewriter restarting");
                self.clear();
                self.phase = Phase::Resetting;
                return Some(self.tick(self.timing.restart_delay));
            }
        };
        Some(self.plan_reveal(line, col, jitter))
    }

    /// Schedule character `col` of `line`, or the line pause once the line
    /// is exhausted.
    fn plan_reveal(&mut self, line: usize, col: usize, jitter: &mut impl Jitter) -> Tick {
        if col < self.line_len(line) {
            self.phase = Phase::Revealing { line, col };
            let delay = self.timing.next_char_delay(jitter);
            self.tick(delay)
        } else {
            self.phase = Phase::LinePause { line };
            self.tick(self.timing.line_pause)
        }
    }

    fn tick(&self, delay: Duration) -> Tick {
        Tick {
            delay,
            generation: self.generation,
        }
    }

    fn clear(&mut self) {
        self.revealed.iter_mut().for_each(|n| *n = 0);
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    /// Revealed prefix of `line`; empty for out of range lines.
    pub fn revealed(&self, line: usize) -> &str {
        let (Some(text), Some(&count)) = (self.lines.get(line), self.revealed.get(line)) else {
            return "";
        };
        match text.char_indices().nth(count) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    /// Everything revealed so far, lines joined top to bottom.
    pub fn text(&self) -> String {
        (0..self.lines.len()).map(|i| self.revealed(i)).collect()
    }

    pub fn is_line_complete(&self, line: usize) -> bool {
        line < self.lines.len() && self.revealed[line] == self.line_len(line)
    }

    /// Line that should show the blinking caret: the one being typed, while
    /// it still has characters left.
    pub fn caret_line(&self) -> Option<usize> {
        match self.phase {
            Phase::Revealing { line, .. } if self.running && !self.is_line_complete(line) => {
                Some(line)
            }
            _ => None,
        }
    }
}

/// Syntax coloring applied to each typed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Plain,
    Keyword,
    Key,
    String,
    Bracket,
    Punctuation,
}

impl Tint {
    pub fn class(self) -> &'static str {
        match self {
            Tint::Plain => "text-foreground",
            Tint::Keyword => "text-blue-400 dark:text-blue-300",
            Tint::Key => "text-purple-400 dark:text-purple-300",
            Tint::String | Tint::Bracket => "text-emerald-400 dark:text-emerald-300",
            Tint::Punctuation => "text-foreground/60",
        }
    }
}

const KEYWORDS: [&str; 1] = ["const"];
const KEYS: [&str; 4] = ["developer", "name", "role", "skills"];

/// One [`Tint`] per character of `line`.
pub fn tints(line: &str) -> Vec<Tint> {
    let chars = line.chars().collect::<Vec<_>>();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let close = chars[i + 1..]
                .iter()
                .position(|&c| c == '"')
                .map_or(chars.len(), |p| i + 1 + p + 1);
            out.extend(std::iter::repeat_n(Tint::String, close - i));
            i = close;
        } else if c.is_alphanumeric() || c == '_' {
            let end = chars[i..]
                .iter()
                .position(|&c| !(c.is_alphanumeric() || c == '_'))
                .map_or(chars.len(), |p| i + p);
            let word = chars[i..end].iter().collect::<String>();
            let tint = if KEYWORDS.contains(&word.as_str()) {
                Tint::Keyword
            } else if KEYS.contains(&word.as_str()) {
                Tint::Key
            } else {
                Tint::Plain
            };
            out.extend(std::iter::repeat_n(tint, end - i));
            i = end;
        } else {
            out.push(match c {
                '{' | '}' | '[' | ']' => Tint::Bracket,
                ':' | '=' | ',' | ';' => Tint::Punctuation,
                _ => Tint::Plain,
            });
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(unit: f64) -> impl FnMut() -> f64 {
        move || unit
    }

    /// Drive the sequencer tick by tick, recording the text after each step.
    fn run(tw: &mut Typewriter, steps: usize) -> Vec<(Duration, String)> {
        let mut jitter = fixed(0.0);
        let mut out = vec![];
        let mut next = tw.start();
        for _ in 0..steps {
            let Some(tick) = next else { break };
            next = tw.advance(tick.generation, &mut jitter);
            out.push((tick.delay, tw.text()));
        }
        out
    }

    #[test]
    fn test_default_timing() {
        let timing = TypewriterTiming::default();
        assert_eq!(timing.char_delay, Duration::from_millis(50));
        assert_eq!(timing.char_jitter, Duration::from_millis(30));
        assert_eq!(timing.line_pause, Duration::from_millis(200));
        assert_eq!(timing.completion_pause, Duration::from_millis(3000));
        assert_eq!(timing.restart_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_two_line_scenario() {
        let mut tw = Typewriter::new(["ab", "c"], TypewriterTiming::default());
        let mut jitter = fixed(0.0);
        assert_eq!(tw.text(), "");

        let start = tw.start().expect("non-empty script starts");
        assert_eq!(start.delay, Duration::ZERO);

        let mut seen = vec![tw.text()];
        let mut delays = vec![];
        let mut next = Some(start);
        // start, a, b, pause, c, pause, completion, reset, a
        for _ in 0..9 {
            let tick = next.expect("sequencer never stops on its own");
            delays.push(tick.delay);
            next = tw.advance(tick.generation, &mut jitter);
            seen.push(tw.text());
        }
        seen.dedup();
        assert_eq!(seen, vec!["", "a", "ab", "abc", "", "a"]);

        let ms = Duration::from_millis;
        assert_eq!(
            delays,
            vec![
                ms(0),    // start delay
                ms(50),   // a
                ms(50),   // b
                ms(200),  // end of line 0
                ms(50),   // c
                ms(200),  // end of line 1
                ms(3000), // completion pause
                ms(1000), // restart delay
                ms(50),   // a again
            ]
        );
    }

    #[test]
    fn test_full_reveal_is_concatenation() {
        let script = ["const x = {", "  y: \"z\",", "};"];
        let mut tw = Typewriter::new(script, TypewriterTiming::default());
        let mut jitter = fixed(0.5);
        let mut next = tw.start();
        while let Some(tick) = next {
            if tw.phase() == Phase::Completed {
                break;
            }
            next = tw.advance(tick.generation, &mut jitter);
        }
        assert_eq!(tw.text(), script.concat());
        for i in 0..script.len() {
            assert_eq!(tw.revealed(i), script[i]);
            assert!(tw.is_line_complete(i));
        }
        assert_eq!(tw.caret_line(), None);
    }

    #[test]
    fn test_reveal_is_monotonic_per_line() {
        let script = ["héllo", "", "wörld"];
        let mut tw = Typewriter::new(script, TypewriterTiming::default());
        let mut jitter = fixed(0.9);
        let mut next = tw.start();
        let mut prev = (0..script.len()).map(|_| String::new()).collect::<Vec<_>>();
        while let Some(tick) = next {
            if tw.phase() == Phase::Completed {
                break;
            }
            next = tw.advance(tick.generation, &mut jitter);
            for (i, line) in script.iter().enumerate() {
                let now = tw.revealed(i);
                assert!(line.starts_with(now));
                assert!(now.starts_with(prev[i].as_str()));
                assert!(now.chars().count() <= prev[i].chars().count() + 1);
                // a later line never starts before earlier lines are done
                if !now.is_empty() {
                    assert!((0..i).all(|j| tw.is_line_complete(j)));
                }
                prev[i] = now.to_string();
            }
        }
        assert_eq!(tw.text(), "héllowörld");
    }

    #[test]
    fn test_jitter_is_bounded() {
        let timing = TypewriterTiming::default();
        for unit in [-1.0, 0.0, 0.25, 0.999, 7.0] {
            let delay = timing.next_char_delay(&mut fixed(unit));
            assert!(delay >= Duration::from_millis(50));
            assert!(delay <= Duration::from_millis(80));
        }
    }

    #[test]
    fn test_clears_after_completion_and_restarts_at_line_zero() {
        let mut tw = Typewriter::new(["ab", "c"], TypewriterTiming::default());
        let mut jitter = fixed(0.0);
        let mut next = tw.start();
        while tw.phase() != Phase::Completed {
            let tick = next.expect("tick");
            next = tw.advance(tick.generation, &mut jitter);
        }
        assert_eq!(tw.text(), "abc");
        let tick = next.expect("completion tick");
        assert_eq!(tick.delay, tw.timing().completion_pause);

        let next = tw.advance(tick.generation, &mut jitter).expect("reset tick");
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Resetting);
        assert_eq!(tw.caret_line(), None);

        tw.advance(next.generation, &mut jitter);
        assert_eq!(tw.phase(), Phase::Revealing { line: 0, col: 0 });
        assert_eq!(tw.caret_line(), Some(0));
    }

    #[test]
    fn test_cancel_mid_reveal_ignores_late_ticks() {
        let mut tw = Typewriter::new(["abc", "defg", "hi"], TypewriterTiming::default());
        let mut jitter = fixed(0.0);
        let mut next = tw.start();
        // into the middle of line 1
        while tw.revealed(1) != "de" {
            let tick = next.expect("tick");
            next = tw.advance(tick.generation, &mut jitter);
        }
        let pending = next.expect("pending tick");
        tw.cancel();
        assert!(!tw.is_running());

        assert_eq!(tw.advance(pending.generation, &mut jitter), None);
        assert_eq!(tw.advance(pending.generation, &mut jitter), None);
        assert_eq!(tw.text(), "abcde");
        assert_eq!(tw.caret_line(), None);
    }

    #[test]
    fn test_restart_invalidates_previous_generation() {
        let mut tw = Typewriter::new(["ab"], TypewriterTiming::default());
        let mut jitter = fixed(0.0);
        let first = tw.start().expect("tick");
        let second = tw.start().expect("tick");
        assert_ne!(first.generation, second.generation);
        assert_eq!(tw.advance(first.generation, &mut jitter), None);
        assert!(tw.advance(second.generation, &mut jitter).is_some());
    }

    #[test]
    fn test_empty_script_never_starts() {
        let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default());
        assert_eq!(tw.start(), None);
        assert!(!tw.is_running());
        assert_eq!(tw.advance(Generation::default(), &mut fixed(0.0)), None);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.caret_line(), None);
        assert_eq!(tw.revealed(0), "");
    }

    #[test]
    fn test_run_helper_start_delay() {
        let timing = TypewriterTiming::default().with_start_delay(Duration::from_millis(1000));
        let mut tw = Typewriter::new(["x"], timing);
        let steps = run(&mut tw, 2);
        assert_eq!(
            steps,
            vec![
                (Duration::from_millis(1000), String::new()),
                (Duration::from_millis(50), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_tints() {
        let line = "const a = {";
        let t = tints(line);
        assert_eq!(t.len(), line.chars().count());
        assert_eq!(&t[..5], &[Tint::Keyword; 5]);
        // the space after a keyword stays plain
        assert_eq!(t[5], Tint::Plain);
        assert_eq!(t[6], Tint::Plain);
        assert_eq!(t[8], Tint::Punctuation);
        assert_eq!(t[10], Tint::Bracket);

        let t = tints("  name: \"Hoeun\",");
        assert_eq!(&t[2..6], &[Tint::Key; 4]);
        assert_eq!(t[6], Tint::Punctuation);
        assert_eq!(&t[8..15], &[Tint::String; 7]);
        assert_eq!(t[15], Tint::Punctuation);

        // unterminated string runs to the end of the line
        assert_eq!(tints("\"ab"), vec![Tint::String; 3]);
    }
}
