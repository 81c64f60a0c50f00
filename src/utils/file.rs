//! File reading utilities

use crate::error::{FreakyfetchError, Result};
use std::path::Path;

/// Read first line of a file, trimmed.
/// Meant for single-line files like /proc/sys/kernel/hostname.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FreakyfetchError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];
    // SAFETY: the fd is closed on every path and `read` never writes past `buffer`
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC);
        if fd < 0 {
            return Err(FreakyfetchError::from(std::io::Error::last_os_error()));
        }
        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);
        n
    };

    if bytes_read < 0 {
        return Err(FreakyfetchError::from(std::io::Error::last_os_error()));
    }

    let content = String::from_utf8_lossy(&buffer[..bytes_read as usize]);
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_only_the_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostname");
        std::fs::write(&path, "  freakstation \nsecond line\n").unwrap();
        assert_eq!(read_first_line(&path).unwrap(), "freakstation");
    }

    #[test]
    fn empty_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, "").unwrap();
        assert_eq!(read_first_line(&path).unwrap(), "");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_first_line(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, FreakyfetchError::Io(_)));
    }
}
