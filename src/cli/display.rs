// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the edaoogle CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `EDAOOGLE_THEME` when set, then `COLORFGBG`, and defaults to dark.
//! `NO_COLOR` and non-TTY output turn all styling off, so piping `search`
//! output into another tool yields plain text.

use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("EDAOOGLE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color escape, or nothing when colors are off.
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (border, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print a `label: value` row with the label column aligned.
pub fn field(label: &str, value: &str) {
    row(&format!(
        "  {} {}",
        pad_right(&themed(GRAY, &[], &format!("{}:", label)), 14),
        value
    ));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border(GRAY);
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

/// Print a centered title between double lines.
pub fn title(text: &str) {
    let (border, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), reset);
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset,
        " ".repeat(left_pad),
        colored,
        " ".repeat(total_pad - left_pad),
        border,
        reset
    );
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Truncate to `max_chars` characters, adding a `...` prefix if needed
pub fn truncate_path(path: &str, max_chars: usize) -> String {
    let len = path.chars().count();
    if len <= max_chars {
        return path.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    let color = if value < 5.0 {
        GREEN
    } else if value < 50.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

/// Density scores are small fractions; show enough digits to rank by eye.
pub fn score_value(score: f64) -> String {
    themed(GREEN, &[], &format!("{:>9.6}", score))
}

/// Percentage of `raw` saved by `stored`, colored by sign.
pub fn savings(raw: usize, stored: usize) -> String {
    if raw == 0 {
        return themed(GRAY, &[], "N/A");
    }
    let saved_pct = (1.0 - stored as f64 / raw as f64) * 100.0;
    if saved_pct.abs() < 0.5 {
        themed(GRAY, &[], "0%")
    } else if saved_pct > 0.0 {
        themed(GREEN, &[BOLD], &format!("{:.0}%", saved_pct))
    } else {
        themed(RED, &[BOLD], &format!("{:+.0}%", saved_pct))
    }
}

/// Green "OK" or red "FAILED".
pub fn status(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "OK")
    } else {
        themed(RED, &[BOLD], "FAILED")
    }
}
