//! Terminal geometry

use crate::data::TerminalSize;

/// Query the size of the terminal on stdout, falling back to `$COLUMNS`/`$LINES`.
/// Unknown dimensions are `0`.
pub fn terminal_size() -> TerminalSize {
    if let Some(size) = ioctl_size(libc::STDOUT_FILENO) {
        return size;
    }
    let from_env = |key: &str| {
        std::env::var(key)
            .ok()
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(0)
    };
    TerminalSize {
        rows: from_env("LINES"),
        cols: from_env("COLUMNS"),
    }
}

fn ioctl_size(fd: libc::c_int) -> Option<TerminalSize> {
    // SAFETY: TIOCGWINSZ only writes into the winsize struct we pass
    let ws = unsafe {
        let mut ws: libc::winsize = std::mem::zeroed();
        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) != 0 {
            return None;
        }
        ws
    };
    if ws.ws_col == 0 {
        return None;
    }
    Some(TerminalSize {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}
