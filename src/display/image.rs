//! Image logo rendered with half-block glyphs

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::GenericImageView;

use super::style::{true_color, true_color_fg, NORMAL, RED};
use crate::error::{FreakyfetchError, Result};

/// Display size in terminal cells
pub const IMAGE_COLUMNS: u32 = 18;
pub const IMAGE_ROWS: u32 = 9;

/// Line height reported for image mode, also used when the image fails
pub const IMAGE_HEIGHT: usize = IMAGE_ROWS as usize;

const UPPER_HALF: char = '\u{2580}';
const ALPHA_CUTOFF: u8 = 128;

/// Image shipped with the package for `os_name`
pub fn default_image_path(os_name: &str) -> PathBuf {
    super::install_lib_dir(os_name).join("freaky.png")
}

/// Render `path` as `rows` lines of `columns` cells, two pixels per cell.
pub fn render_image(path: &Path, columns: u32, rows: u32) -> Result<String> {
    let img = image::open(path)
        .map_err(|err| FreakyfetchError::backend(format!("{}: {}", path.display(), err)))?;
    let img = img.resize_exact(columns, rows * 2, FilterType::Triangle);

    let mut out = String::new();
    for row in 0..rows {
        for col in 0..columns {
            let top = img.get_pixel(col, row * 2).0;
            let bottom = img.get_pixel(col, row * 2 + 1).0;
            let top_visible = top[3] >= ALPHA_CUTOFF;
            let bottom_visible = bottom[3] >= ALPHA_CUTOFF;

            match (top_visible, bottom_visible) {
                (true, true) => {
                    out.push_str(&true_color(rgb(top), rgb(bottom)));
                    out.push(UPPER_HALF);
                }
                (true, false) => {
                    out.push_str(NORMAL);
                    out.push_str(&true_color_fg(rgb(top)));
                    out.push(UPPER_HALF);
                }
                (false, true) => {
                    out.push_str(NORMAL);
                    out.push_str(&true_color_fg(rgb(bottom)));
                    out.push('\u{2584}');
                }
                (false, false) => {
                    out.push_str(NORMAL);
                    out.push(' ');
                }
            }
        }
        out.push_str(NORMAL);
        out.push('\n');
    }
    Ok(out)
}

const ERROR_LINES: [&str; IMAGE_HEIGHT] = [
    "",
    "   There was an",
    "    error: the",
    "  image could not",
    "   be displayed.",
    "   see IMAGES.md",
    "   for more info.",
    "",
    "",
];

/// Printed in place of the image when it cannot be shown, [`IMAGE_HEIGHT`] lines tall
pub fn error_panel() -> String {
    let mut out = format!("\x1b[0E\x1b[3C{}", RED);
    for line in ERROR_LINES {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(NORMAL);
    out
}

fn rgb(pixel: [u8; 4]) -> [u8; 3] {
    [pixel[0], pixel[1], pixel[2]]
}
