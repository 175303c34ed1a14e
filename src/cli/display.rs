// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Header and error coloring for the linedex CLI.
//!
//! The core hands back plain strings. The only thing colored here is the
//! first line of a result (green when something matched, yellow for
//! [`NO_RESULTS`]) and the error label (red). Colors are off when `NO_COLOR`
//! is set or stdout is not a TTY, so piped output is exactly what the library
//! produced.
//!
//! `LINEDEX_THEME` ("dark" or "light") picks the palette; otherwise a light
//! background reported by `COLORFGBG` selects the light one.

use std::sync::OnceLock;

use linedex::NO_RESULTS;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

/// The three colors the CLI ever prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub matched: Rgb,
    pub empty: Rgb,
    pub error: Rgb,
}

/// OneDark
const DARK: Palette = Palette {
    matched: (152, 195, 121),
    empty: (229, 192, 123),
    error: (224, 108, 117),
};

/// One Light
const LIGHT: Palette = Palette {
    matched: (80, 161, 79),
    empty: (193, 132, 1),
    error: (228, 86, 73),
};

fn palette_for(theme: Option<&str>, colorfgbg: Option<&str>) -> Palette {
    match theme.map(str::to_ascii_lowercase).as_deref() {
        Some("light") => return LIGHT,
        Some("dark") => return DARK,
        _ => {}
    }
    // "fg;bg": backgrounds 7 and 9..=15 are light
    let light_bg = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg >= 9);
    if light_bg {
        LIGHT
    } else {
        DARK
    }
}

fn palette() -> Palette {
    static PALETTE: OnceLock<Palette> = OnceLock::new();
    *PALETTE.get_or_init(|| {
        palette_for(
            std::env::var("LINEDEX_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

fn bold((r, g, b): Rgb, text: &str) -> String {
    format!("{}\x1b[38;2;{};{};{}m{}{}", BOLD, r, g, b, text, RESET)
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color the first line of formatted results. Matched lines are never altered.
pub fn paint_results(rendered: &str, colors: bool) -> String {
    if !colors {
        return rendered.to_string();
    }
    let (head, rest) = rendered.split_once('\n').unwrap_or((rendered, ""));
    let palette = palette();
    let color = if head == NO_RESULTS {
        palette.empty
    } else {
        palette.matched
    };
    let mut out = bold(color, head);
    if rendered.contains('\n') {
        out.push('\n');
        out.push_str(rest);
    }
    out
}

/// Error prefix for messages written to stderr.
pub fn error_label(colors: bool) -> String {
    if colors {
        bold(palette().error, "❌")
    } else {
        "❌".to_string()
    }
}
