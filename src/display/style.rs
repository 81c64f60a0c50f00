//! Terminal escape sequences and glyphs

pub const NORMAL: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const SPRING_GREEN: &str = "\x1b[38;5;120m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const PINK: &str = "\x1b[38;5;201m";
pub const LPINK: &str = "\x1b[38;5;213m";
pub const BACKGROUND_GREEN: &str = "\x1b[0;42m";
pub const BACKGROUND_RED: &str = "\x1b[0;41m";
pub const BACKGROUND_WHITE: &str = "\x1b[0;47m";

#[cfg(windows)]
pub const BLOCK_CHAR: &str = "\u{2588}";
#[cfg(not(windows))]
pub const BLOCK_CHAR: &str = "\u{2587}";

/// Template placeholders and what they expand to
pub const TEMPLATE_TOKENS: &[(&str, &str)] = &[
    ("{NORMAL}", NORMAL),
    ("{BOLD}", BOLD),
    ("{BLACK}", BLACK),
    ("{RED}", RED),
    ("{GREEN}", GREEN),
    ("{SPRING_GREEN}", SPRING_GREEN),
    ("{YELLOW}", YELLOW),
    ("{BLUE}", BLUE),
    ("{MAGENTA}", MAGENTA),
    ("{CYAN}", CYAN),
    ("{WHITE}", WHITE),
    ("{PINK}", PINK),
    ("{LPINK}", LPINK),
    ("{BLOCK}", BLOCK_CHAR),
    ("{BLOCK_VERTICAL}", BLOCK_CHAR),
    ("{BACKGROUND_GREEN}", BACKGROUND_GREEN),
    ("{BACKGROUND_RED}", BACKGROUND_RED),
    ("{BACKGROUND_WHITE}", BACKGROUND_WHITE),
];

/// Move the cursor right by `columns`
pub fn cursor_right(columns: usize) -> String {
    format!("\x1b[{}C", columns)
}

pub fn cursor_up(lines: usize) -> String {
    format!("\x1b[{}A", lines)
}

pub fn cursor_down(lines: usize) -> String {
    format!("\x1b[{}B", lines)
}

/// 24-bit foreground + background, used by the image backend
pub fn true_color(fg: [u8; 3], bg: [u8; 3]) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m",
        fg[0], fg[1], fg[2], bg[0], bg[1], bg[2]
    )
}

pub fn true_color_fg(fg: [u8; 3]) -> String {
    format!("\x1b[38;2;{};{};{}m", fg[0], fg[1], fg[2])
}
