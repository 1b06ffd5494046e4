//! Count-up statistics ("120+", "94%").

use super::easing::Ease;
use serde::Serialize;

/// A displayed statistic split into its numeric target and trailing text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterValue {
    /// The statistic as written in content; the last frame shows it verbatim.
    pub display: String,
    pub target: f64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterValue {
    /// Split `"120+"` into `120` and `"+"`. Returns `None` when the value has
    /// no number to count towards.
    pub fn parse(display: &str) -> Option<Self> {
        let start = display.find(|c: char| c.is_ascii_digit())?;
        let rest = &display[start..];
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let target = rest[..end].trim_end_matches('.').parse::<f64>().ok()?;
        Some(Self {
            display: display.to_string(),
            target,
            prefix: display[..start].to_string(),
            suffix: rest[end..].to_string(),
        })
    }

    /// Text shown at progress `t` of a count-up using `ease`.
    ///
    /// Intermediate values snap to whole numbers; the final frame is the
    /// original text.
    pub fn display_at(&self, t: f64, ease: Ease) -> String {
        if t >= 1.0 {
            return self.display.clone();
        }
        let value = (self.target * ease.apply(t)).round();
        format!("{}{}{}", self.prefix, super::style::fmt_num(value), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffix() {
        let v = CounterValue::parse("120+").unwrap();
        assert_eq!(v.target, 120.0);
        assert_eq!(v.suffix, "+");
        assert_eq!(v.prefix, "");
    }

    #[test]
    fn parses_percent_and_prefix() {
        let v = CounterValue::parse("~28%").unwrap();
        assert_eq!(v.target, 28.0);
        assert_eq!(v.prefix, "~");
        assert_eq!(v.suffix, "%");
    }

    #[test]
    fn no_number_is_none() {
        assert!(CounterValue::parse("many").is_none());
    }

    #[test]
    fn counts_from_zero_to_target() {
        let v = CounterValue::parse("94%").unwrap();
        assert_eq!(v.display_at(0.0, Ease::Power2Out), "0%");
        assert_eq!(v.display_at(1.0, Ease::Power2Out), "94%");
        assert_eq!(v.display_at(0.5, Ease::None), "47%");
    }

    #[test]
    fn last_frame_is_source_text() {
        let v = CounterValue::parse("4.75x").unwrap();
        assert_eq!(v.target, 4.75);
        assert_eq!(v.display_at(0.5, Ease::None), "2x");
        assert_eq!(v.display_at(1.0, Ease::None), "4.75x");
        assert_eq!(v.display_at(3.0, Ease::None), "4.75x");

        let padded = CounterValue::parse("0120+").unwrap();
        assert_eq!(padded.display_at(1.0, Ease::Power2Out), "0120+");
    }
}
