//! Static font-metric tables for the built-in PDF faces.
//!
//! Character widths are in em units (relative to font size), taken from the
//! standard AFM tables of the base-14 fonts, so greedy word-wrap here lands on
//! the same breaks the written PDF shows. All tables cover ASCII 0x20..=0x7E
//! (95 printable characters); index = (char as usize) - 32. Non-ASCII falls
//! back to an average width, which slightly over-reserves rather than
//! overflowing a line.

use crate::render::templates::FontFace;

/// Static character-width table for one typeface.
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Fallback width for codepoints outside 0x20..=0x7E.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`, returning the printed lines.
    ///
    /// A single word wider than the line gets a line of its own rather than
    /// being split mid-word. Whitespace runs collapse to single spaces.
    pub fn wrap_text(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return vec![];
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Width tables (AFM widths ÷ 1000)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica — sans-serif templates.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Times Roman — serif templates.
static TIMES_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Times,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.470,
    space_width: 0.250,
};

/// Returns the metric table for a typeface. Bold variants reuse the regular
/// table; the base-14 bold faces differ by a few percent, within the slack
/// the wrap already leaves at line ends.
pub fn metrics_for(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::Times => &TIMES_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_is_zero() {
        assert_eq!(metrics_for(FontFace::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_known_widths() {
        let metrics = metrics_for(FontFace::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = metrics_for(FontFace::Times);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_empty_text_no_lines() {
        let metrics = metrics_for(FontFace::Helvetica);
        assert!(metrics.wrap_text("", 40.0).is_empty());
        assert!(metrics.wrap_text("   ", 40.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let metrics = metrics_for(FontFace::Helvetica);
        let lines = metrics.wrap_text("Senior Engineer", 40.0);
        assert_eq!(lines, vec!["Senior Engineer"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        let metrics = metrics_for(FontFace::Helvetica);
        let text = "word ".repeat(30);
        let lines = metrics.wrap_text(&text, 10.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                metrics.measure_str(line) <= 10.0 + 1e-3,
                "line overflows: {line:?}"
            );
        }
    }

    #[test]
    fn test_wrap_rejoins_to_original_words() {
        let metrics = metrics_for(FontFace::Times);
        let text = "Architected a distributed caching layer using consistent hashing";
        let lines = metrics.wrap_text(text, 12.0);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_oversized_word_gets_own_line() {
        let metrics = metrics_for(FontFace::Helvetica);
        let lines = metrics.wrap_text("tiny incomprehensibilities tiny", 5.0);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn test_times_narrower_than_helvetica() {
        let text = "Delivered measurable improvements across services";
        let helv = metrics_for(FontFace::Helvetica).measure_str(text);
        let times = metrics_for(FontFace::Times).measure_str(text);
        assert!(times < helv);
    }
}
