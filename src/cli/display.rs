// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the kata CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Box drawing for the
//! demo block, colored booleans and "not found" markers for the subcommands.
//! Respects `NO_COLOR` and non-TTY detection so piped output stays plain.
//!
//! # Theme detection order
//!
//! 1. `KATA_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

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

/// Resolve a theme from the two environment hints.
fn theme_from_env(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("KATA_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    theme_from_env(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, plain text off a TTY
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
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

/// Greedy word wrap on spaces. Words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ') {
        let needed = if line.is_empty() {
            visible_len(word)
        } else {
            visible_len(&line) + 1 + visible_len(word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(piece: &str) -> String {
    themed(GRAY, &[], piece)
}

/// Print a content line: │ content          │
///
/// Content wider than the box is wrapped onto continuation rows.
pub fn row(content: &str) {
    for line in wrap(content, BOX_WIDTH - 2) {
        let pad = (BOX_WIDTH - 1).saturating_sub(visible_len(&line));
        println!("{} {}{}{}", border("│"), line, " ".repeat(pad), border("│"));
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `true` in green, `false` in red
pub fn bool_badge(value: bool) -> String {
    if value {
        themed(GREEN, &[BOLD], "true")
    } else {
        themed(RED, &[BOLD], "false")
    }
}

/// Absent two-sum result
pub fn not_found() -> String {
    themed(YELLOW, &[], "not found")
}

/// Render labels as a bracketed, quoted list: `['1', '2', 'Fizz']`
pub fn label_list(labels: &[String]) -> String {
    let quoted: Vec<String> = labels.iter().map(|l| format!("'{}'", l)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render any displayable items as a bracketed list: `[0, 1, 1, 2]`
pub fn value_list<T: std::fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
