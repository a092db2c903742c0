//! Counter animator for statistic text such as `"$2,500+"` or `"98%"`.

use shopfront_commerce::Currency;

use crate::command::{CounterId, TimerId};

/// Parsed form of a counter's authored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterText {
    /// A leading integer magnitude with text around it.
    Numeric {
        prefix: String,
        target: u64,
        suffix: String,
    },
    /// Left exactly as authored: price ranges such as `"$10-20"`, texts
    /// without digits, and zero targets.
    Verbatim,
}

impl CounterText {
    /// Split `text` into prefix, leading integer magnitude and suffix.
    ///
    /// Thousands separators (`,`) inside the magnitude are skipped.
    pub fn parse(text: &str) -> Self {
        if is_currency_range(text) {
            return CounterText::Verbatim;
        }

        let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
            return CounterText::Verbatim;
        };
        let (prefix, rest) = text.split_at(start);

        let mut target: u64 = 0;
        // Byte offset just past the last digit consumed.
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            if let Some(digit) = c.to_digit(10) {
                target = match target
                    .checked_mul(10)
                    .and_then(|t| t.checked_add(u64::from(digit)))
                {
                    Some(t) => t,
                    None => return CounterText::Verbatim,
                };
                end = i + 1;
            } else if c == ',' && next_is_digit(rest, i) {
                continue;
            } else {
                break;
            }
        }

        if target == 0 {
            return CounterText::Verbatim;
        }

        CounterText::Numeric {
            prefix: prefix.to_string(),
            target,
            suffix: rest[end..].to_string(),
        }
    }
}

fn next_is_digit(text: &str, comma_at: usize) -> bool {
    text[comma_at + 1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Ranges such as `"$10-20"` are not animated.
fn is_currency_range(text: &str) -> bool {
    let has_dash = text.contains(&['-', '\u{2013}', '\u{2014}'][..]);
    has_dash && text.chars().any(Currency::is_symbol_char)
}

/// Format `value` with `separator` between groups of three digits.
pub fn format_grouped(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// One animated number.
///
/// Starts at zero, advances by `target / steps` per tick, and finishes on the
/// tick that reaches or passes the target. The final text is the authored
/// text, so the animation ends exactly where the page copy says.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    id: CounterId,
    authored: String,
    parsed: CounterText,
    display: String,
    current: f64,
    step: f64,
    counted: bool,
    finished: bool,
    separator: char,
}

impl Counter {
    /// Tag a counter text. Nothing animates until [`Counter::start`].
    pub fn new(id: CounterId, authored: impl Into<String>, separator: char) -> Self {
        let authored = authored.into();
        Self {
            id,
            parsed: CounterText::parse(&authored),
            display: authored.clone(),
            authored,
            current: 0.0,
            step: 0.0,
            counted: false,
            finished: false,
            separator,
        }
    }

    pub fn id(&self) -> CounterId {
        self.id
    }

    /// The timer driving this counter.
    pub fn timer(&self) -> TimerId {
        TimerId(self.id.0 as u64)
    }

    /// Text currently shown.
    pub fn text(&self) -> &str {
        &self.display
    }

    /// Whether the counted marker is set.
    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Whether the animation has reached its final text.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn parsed(&self) -> &CounterText {
        &self.parsed
    }

    /// Mark counted and reset to zero.
    ///
    /// Returns `true` when an interval must drive [`Counter::tick`]. Verbatim
    /// texts and already counted counters return `false` and stay as they are.
    pub fn start(&mut self, steps: u32) -> bool {
        if self.counted {
            return false;
        }
        self.counted = true;
        match &self.parsed {
            CounterText::Numeric { target, .. } => {
                self.current = 0.0;
                self.step = *target as f64 / f64::from(steps.max(1));
                self.display = self.render(0);
                true
            }
            CounterText::Verbatim => {
                self.finished = true;
                false
            }
        }
    }

    /// Advance one step. Returns `true` once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return true;
        }
        let CounterText::Numeric { target, .. } = &self.parsed else {
            self.finished = true;
            return true;
        };
        let target = *target;

        self.current += self.step;
        if self.current >= target as f64 {
            self.current = target as f64;
            self.display = self.authored.clone();
            self.finished = true;
        } else {
            self.display = self.render(self.current.floor() as u64);
        }
        self.finished
    }

    fn render(&self, value: u64) -> String {
        match &self.parsed {
            CounterText::Numeric { prefix, suffix, .. } => {
                format!("{}{}{}", prefix, format_grouped(value, self.separator), suffix)
            }
            CounterText::Verbatim => self.authored.clone(),
        }
    }
}
