// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the toponym CLI.
//!
//! Box drawing and a handful of colored labels. Colors are dropped when
//! stdout is not a TTY or `NO_COLOR` is set.

// Inner width of a box, borders excluded.
pub const BOX_WIDTH: usize = 60;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const GRAY: &str = "\x1b[90m";

/// Colors only for an interactive stdout, and never under `NO_COLOR`.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wraps `text` in escape codes when colors are on.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(text: &str) -> String {
    styled(&[GRAY], text)
}

/// Terminal columns taken by `s`, ignoring SGR sequences like `\x1b[1m`.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut width = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

/// One boxed line, padded out to [`BOX_WIDTH`].
pub fn row(content: &str) {
    println!("{}{}{}", border("│"), pad_right(content, BOX_WIDTH), border("│"));
}

/// Opens a box with `label` set into its top edge.
pub fn section_top(label: &str) {
    let label = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!("{}{}{}", border("┌"), label, border(&format!("{}┐", rule)));
}

/// Closes a box opened by [`section_top`].
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Left-aligns `s` in `width` columns; longer strings pass through.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Colored label for a synonym classification.
pub fn synonym_label(kind: toponym::SynonymKind) -> String {
    use toponym::SynonymKind;
    match kind {
        SynonymKind::Exact => styled(&[BOLD, GREEN], "exact"),
        SynonymKind::Misprint => styled(&[BOLD, YELLOW], "misprint"),
        SynonymKind::NotSynonym => styled(&[DIM], "not a synonym"),
    }
}

/// Accept/reject verdict for an automaton run.
pub fn verdict(distance: Option<usize>) -> String {
    match distance {
        Some(d) => styled(&[GREEN], &format!("accept (distance {})", d)),
        None => styled(&[RED], "reject"),
    }
}
