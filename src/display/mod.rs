//! Rendering: logo (ascii template or image), info panel and cursor alignment

pub mod image;
pub mod panel;
pub mod style;
pub mod template;

use std::path::PathBuf;

pub use panel::{render_info_panel, InfoPanel};
pub use template::{RenderedLogo, TemplateSearch, GENERIC_TEMPLATE};

/// Line height the info panel is aligned against
pub const LOGO_HEIGHT: usize = 9;

const NARROW_INDENT: usize = 18;
const WIDE_INDENT: usize = 21;

/// Placement of the info panel next to the logo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoLayout {
    /// Columns skipped before every info line
    pub indent: usize,
    pub height: usize,
}

impl LogoLayout {
    /// Layout for a (not yet freakified) OS name.
    ///
    /// The windows logo is narrower, but only when shown on a non-windows host.
    pub fn for_os(os_name: &str) -> Self {
        let indent = if cfg!(not(windows)) && os_name == "windows" {
            NARROW_INDENT
        } else {
            WIDE_INDENT
        };
        Self {
            indent,
            height: LOGO_HEIGHT,
        }
    }
}

/// Installation directory holding templates and images
pub fn install_lib_dir(os_name: &str) -> PathBuf {
    match os_name {
        "android" => PathBuf::from("/data/data/com.termux/files/usr/lib/freakyfetch"),
        "macos" => PathBuf::from("/usr/local/lib/freakyfetch"),
        _ => PathBuf::from("/usr/lib/freakyfetch"),
    }
}

/// Signed distance between logo height and info lines, positive when the logo is taller
pub fn cursor_offset(logo_height: usize, info_lines: usize) -> i64 {
    logo_height as i64 - info_lines as i64
}

/// Escape sequence printed after the info panel
pub fn reconcile_cursor(logo_height: usize, info_lines: usize) -> String {
    let to_move = cursor_offset(logo_height, info_lines);
    if to_move < 0 {
        style::cursor_up(to_move.unsigned_abs() as usize)
    } else {
        style::cursor_down(to_move as usize)
    }
}
