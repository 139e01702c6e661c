//! Best-effort color literal scanning.
//!
//! This is a visual aid, not a lexer: recognition is heuristic
//! substring scanning, and every failure mode is a silent `None`. The
//! parser is a pure function so it can be tested (and benchmarked)
//! without touching any painting code.
//!
//! A line can carry a literal in three shapes:
//! - a named color (`"blue"`, case-insensitive, anywhere in the line),
//! - a parenthesized channel triple (`rgb(255, 0, 0)`, `QColor(240,
//!   240, 240)`; the prefix is irrelevant, only the group counts),
//! - a hex token (`#007ACC`).
//!
//! The candidate that starts earliest in the line wins; if that
//! candidate fails to parse, the line is skipped rather than falling
//! through to a later candidate.

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The fixed named-color vocabulary.
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
];

/// Scans one line for a color literal.
///
/// Returns the first recognized literal, or `None` if the line holds
/// none or its earliest candidate is malformed. Never panics.
pub fn parse_color_literal(line: &str) -> Option<Rgb> {
    let lower = line.to_ascii_lowercase();

    let named = earliest_named(&lower).map(|(at, color)| (at, Some(color)));
    let group = line.find('(').and_then(|at| {
        let group = group_contents(&line[at + 1..]);
        // A paren group only counts as a color candidate if it could
        // plausibly hold one; ordinary call syntax is left for the
        // other candidates.
        if group.contains(',') || earliest_named(&group.to_ascii_lowercase()).is_some() {
            Some((at, parse_group(group)))
        } else {
            None
        }
    });
    let hex = line
        .find('#')
        .map(|at| (at, parse_hex(&line[at + 1..])));

    let mut winner: Option<(usize, Option<Rgb>)> = None;
    for candidate in [named, group, hex].into_iter().flatten() {
        match winner {
            Some((at, _)) if at <= candidate.0 => {}
            _ => winner = Some(candidate),
        }
    }
    winner.and_then(|(_, color)| color)
}

/// Earliest named-color occurrence in an already-lowercased haystack.
fn earliest_named(lower: &str) -> Option<(usize, Rgb)> {
    NAMED_COLORS
        .iter()
        .filter_map(|(name, color)| lower.find(name).map(|at| (at, *color)))
        .min_by_key(|(at, _)| *at)
}

/// Everything between the opening paren and the closing one (or the
/// end of the line if it never closes).
fn group_contents(after_paren: &str) -> &str {
    match after_paren.find(')') {
        Some(end) => &after_paren[..end],
        None => after_paren,
    }
}

/// Interprets a paren group: a named color inside the group wins,
/// otherwise the first three comma-separated integers are the RGB
/// channels.
fn parse_group(group: &str) -> Option<Rgb> {
    if let Some((_, color)) = earliest_named(&group.to_ascii_lowercase()) {
        return Some(color);
    }

    let mut channels = group.split(',').map(str::trim).take(3);
    let r = channels.next()?.parse().ok()?;
    let g = channels.next()?.parse().ok()?;
    let b = channels.next()?.parse().ok()?;
    Some(Rgb::new(r, g, b))
}

/// Interprets the 6 characters immediately following a `#` marker.
fn parse_hex(after_hash: &str) -> Option<Rgb> {
    let token: String = after_hash.chars().take(6).collect();
    if token.len() != 6 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&token[0..2], 16).ok()?;
    let g = u8::from_str_radix(&token[2..4], 16).ok()?;
    let b = u8::from_str_radix(&token[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_token() {
        assert_eq!(
            parse_color_literal("primary_color = #007ACC"),
            Some(Rgb::new(0, 122, 204))
        );
        assert_eq!(parse_color_literal("x = #FF0000"), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_invalid_hex_skips_line() {
        assert_eq!(parse_color_literal("x = #ZZZZZZ"), None);
        assert_eq!(parse_color_literal("short = #AB1"), None);
    }

    #[test]
    fn test_named_color_case_insensitive() {
        assert_eq!(parse_color_literal("z = blue"), Some(Rgb::new(0, 0, 255)));
        assert_eq!(
            parse_color_literal("let x = RED;"),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(
            parse_color_literal("anything around Yellow here"),
            Some(Rgb::new(255, 255, 0))
        );
    }

    #[test]
    fn test_numeric_triple() {
        assert_eq!(
            parse_color_literal("error_color = QColor(255, 0, 0)"),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(
            parse_color_literal("bg = rgb(240,240,240)"),
            Some(Rgb::new(240, 240, 240))
        );
        // Extra channels: the first three win.
        assert_eq!(
            parse_color_literal("c = rgba(1, 2, 3, 255)"),
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn test_named_color_inside_group() {
        assert_eq!(
            parse_color_literal("selection = QColor(Qt.blue)"),
            Some(Rgb::new(0, 0, 255))
        );
    }

    #[test]
    fn test_truncated_triple_skips_line() {
        assert_eq!(parse_color_literal("broken = QColor(1,2"), None);
    }

    #[test]
    fn test_out_of_range_channel_skips_line() {
        assert_eq!(parse_color_literal("c = rgb(300, 0, 0)"), None);
        assert_eq!(parse_color_literal("c = rgb(-1, 0, 0)"), None);
    }

    #[test]
    fn test_plain_line_has_no_literal() {
        assert_eq!(parse_color_literal("y = 5"), None);
        assert_eq!(parse_color_literal(""), None);
        assert_eq!(parse_color_literal("fn main() {}"), None);
    }

    #[test]
    fn test_earliest_candidate_wins() {
        // The hex token starts before the named color.
        assert_eq!(
            parse_color_literal("c = #00FF00 // not red"),
            Some(Rgb::new(0, 255, 0))
        );
        // The named color starts before the hex token.
        assert_eq!(
            parse_color_literal("red = #0000FF"),
            Some(Rgb::new(255, 0, 0))
        );
    }

    #[test]
    fn test_call_syntax_does_not_mask_later_literal() {
        assert_eq!(
            parse_color_literal("draw(x) // #112233"),
            Some(Rgb::new(0x11, 0x22, 0x33))
        );
    }

    proptest! {
        #[test]
        fn parse_never_panics(line in "\\PC*") {
            let _ = parse_color_literal(&line);
        }

        #[test]
        fn valid_hex_always_parses(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let line = format!("c = #{:02X}{:02X}{:02X}", r, g, b);
            prop_assert_eq!(parse_color_literal(&line), Some(Rgb::new(r, g, b)));
        }
    }
}
