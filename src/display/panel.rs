//! Info panel printed next to the logo

use unicode_width::UnicodeWidthChar;

use super::style::{
    cursor_right, BLACK, BLOCK_CHAR, BLUE, BOLD, CYAN, GREEN, MAGENTA, NORMAL, RED, WHITE, YELLOW,
};
use super::LogoLayout;
use crate::config::DisplayConfig;
use crate::data::{SystemInfo, MAX_GPUS};
use crate::freakify::rewrite_os_name;
use crate::utils::parsing::format_uptime;

/// Columns kept free at the right edge of the terminal
const RIGHT_MARGIN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub text: String,
    /// Labeled lines only, the colors bar is not counted
    pub line_count: usize,
}

/// Render every enabled info line in fixed order.
///
/// Lines are cut so that the indent plus the visible cells stay within
/// `terminal_columns - 4`. Escape sequences do not count against that budget
/// and are always emitted whole. An unknown width (`0`) or a terminal too
/// narrow to hold any text after the indent disables truncation.
pub fn render_info_panel(
    config: &DisplayConfig,
    info: &SystemInfo,
    terminal_columns: u16,
    layout: &LogoLayout,
) -> InfoPanel {
    let budget = usize::from(terminal_columns)
        .checked_sub(RIGHT_MARGIN + layout.indent)
        .filter(|&width| width > 0);
    let mv = cursor_right(layout.indent);
    let label = |name: &str| format!("{}{}{}{}{}", mv, NORMAL, BOLD, name, NORMAL);

    let mut text = String::new();
    let mut line_count = 0;
    let mut emit = |line: String| {
        match budget {
            Some(width) => text.push_str(&fit_visible_width(&line, width)),
            None => text.push_str(&line),
        }
        text.push('\n');
        line_count += 1;
    };

    if config.show.user {
        emit(format!("{}{}{}{}@{}", mv, NORMAL, BOLD, info.user, info.host));
    }
    if config.show.os {
        emit(format!("{}{}", label("OS     "), rewrite_os_name(&info.os_name)));
    }
    if config.show.model {
        emit(format!("{}{}", label("MODEL  "), info.model));
    }
    if config.show.kernel {
        emit(format!("{}{}", label("KERNEL   "), info.kernel));
    }
    if config.show.cpu {
        emit(format!("{}{}", label("CPU    "), info.cpu_model));
    }
    for index in 0..MAX_GPUS {
        if !config.gpu_visible(index) {
            continue;
        }
        if let Some(gpu) = info.gpu(index) {
            emit(format!("{}{}", label("GPU    "), gpu));
        }
    }
    if config.show.ram {
        emit(format!(
            "{}{} MiB/{} MiB",
            label("MEMORY   "),
            info.ram_used_mib,
            info.ram_total_mib
        ));
    }
    if config.show.resolution && info.has_resolution() {
        emit(format!(
            "{}  {}x{}",
            label("RESOLUTION"),
            info.screen_width,
            info.screen_height
        ));
    }
    if config.show.shell {
        emit(format!("{}{}", label("SHELL    "), info.shell));
    }
    if config.show.pkgs {
        emit(format!("{}{}: {}", label("PKGS     "), info.pkgs, info.pkgman_name));
    }
    if config.show.uptime {
        emit(format!("{}{}", label("UPTIME "), format_uptime(info.uptime_seconds)));
    }

    if config.show_colors {
        text.push_str(&colors_bar(&mv));
        text.push('\n');
    }

    InfoPanel { text, line_count }
}

fn colors_bar(mv: &str) -> String {
    let mut bar = format!("{}{}", mv, BOLD);
    for color in [BLACK, RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE] {
        bar.push_str(color);
        bar.push_str(BLOCK_CHAR);
        bar.push_str(BLOCK_CHAR);
    }
    bar.push_str(NORMAL);
    bar
}

/// Keep at most `max_width` visible cells of `line`.
///
/// CSI escape sequences are copied whole wherever they appear, including
/// after the cut, so styling is never left half-written.
pub fn fit_visible_width(line: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut width = 0usize;
    let mut cut = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            out.push(ch);
            if let Some(bracket) = chars.next_if_eq(&'[') {
                out.push(bracket);
                for c in chars.by_ref() {
                    out.push(c);
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if !cut && width.saturating_add(ch_width) <= max_width {
            out.push(ch);
            width += ch_width;
        } else {
            cut = true;
        }
    }
    out
}
