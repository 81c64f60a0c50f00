//! Flat key=value snapshot of the slow-to-probe `SystemInfo` fields
//!
//! RAM usage and uptime are not cached, callers re-probe them after a read.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::APP_NAME;
use crate::data::{BoundedText, SystemInfo};
use crate::error::{FreakyfetchError, Result};

/// `$HOME/.cache/freakyfetch.cache`
pub fn cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cache").join(format!("{}.cache", APP_NAME)))
}

/// Write the cache to the default per-user location
pub fn write(info: &SystemInfo) -> Result<()> {
    let path = cache_path()
        .ok_or_else(|| FreakyfetchError::detection("could not determine home directory"))?;
    write_to(&path, info)
}

/// Read the cache from the default per-user location
pub fn read(info: &mut SystemInfo) -> bool {
    match cache_path() {
        Some(path) => read_from(&path, info),
        None => false,
    }
}

pub fn write_to(path: &Path, info: &SystemInfo) -> Result<()> {
    log::info!("writing cache {}", path.display());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "user={}", info.user)?;
    writeln!(out, "host={}", info.host)?;
    writeln!(out, "version_name={}", info.os_name)?;
    writeln!(out, "host_model={}", info.model)?;
    writeln!(out, "kernel={}", info.kernel)?;
    writeln!(out, "cpu={}", info.cpu_model)?;
    writeln!(out, "screen_width={}", info.screen_width)?;
    writeln!(out, "screen_height={}", info.screen_height)?;
    writeln!(out, "shell={}", info.shell)?;
    writeln!(out, "pkgs={}", info.pkgs)?;
    writeln!(out, "pkgman_name={}", info.pkgman_name)?;
    for gpu in info.gpus.iter().take_while(|g| !g.is_empty()) {
        writeln!(out, "gpu={}", gpu)?;
    }

    out.flush()?;
    Ok(())
}

/// Restore cached fields into `info`. Returns `false` without touching `info`
/// if the cache file cannot be opened or its first line cannot be read.
pub fn read_from(path: &Path, info: &mut SystemInfo) -> bool {
    log::info!("reading cache {}", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::debug!("{}: {}", path.display(), err);
            return false;
        }
    };

    let mut gpus_read = 0;
    let mut lines_read = 0;
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::debug!("{}: {}", path.display(), err);
                if lines_read == 0 {
                    return false;
                }
                break;
            }
        };
        lines_read += 1;
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "user" => restore(&mut info.user, "user", value),
            "host" => restore(&mut info.host, "host", value),
            "version_name" => restore(&mut info.os_name, "version_name", value),
            "host_model" => restore(&mut info.model, "host_model", value),
            "kernel" => restore(&mut info.kernel, "kernel", value),
            "cpu" => restore(&mut info.cpu_model, "cpu", value),
            "gpu" => {
                // the first gpu line replaces whatever was probed before
                if gpus_read == 0 {
                    info.gpus.clear();
                }
                if info.push_gpu(value) {
                    gpus_read += 1;
                }
            }
            "screen_width" => {
                if let Ok(width) = value.trim().parse() {
                    info.screen_width = width;
                }
            }
            "screen_height" => {
                if let Ok(height) = value.trim().parse() {
                    info.screen_height = height;
                }
            }
            "shell" => restore(&mut info.shell, "shell", value),
            "pkgs" => {
                if let Ok(pkgs) = value.trim().parse() {
                    info.pkgs = pkgs;
                }
            }
            "pkgman_name" => restore(&mut info.pkgman_name, "pkgman_name", value),
            _ => {}
        }
    }

    log::debug!("{:?}", info);
    true
}

fn restore<const CAP: usize>(field: &mut BoundedText<CAP>, key: &'static str, value: &str) {
    if let Err(err) = field.try_set(key, value) {
        log::warn!("cache: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemInfo {
        let mut info = SystemInfo::default();
        info.user.set("leon");
        info.host.set("freakstation");
        info.os_name.set("arch");
        info.model.set("LENOVO ThinkPad T480");
        info.kernel.set("Linux 6.9.1-arch1-1 x86_64");
        info.cpu_model.set("Intel(R) Core(TM) i5-8350U CPU @ 1.70GHz");
        info.push_gpu("Intel Corporation UHD Graphics 620");
        info.push_gpu("NVIDIA Corporation GP108M [GeForce MX150]");
        info.screen_width = 1920;
        info.screen_height = 1080;
        info.shell.set("zsh");
        info.pkgs = 1234;
        info.pkgman_name.set("pacman, flatpak");
        info
    }

    #[test]
    fn write_then_read_restores_cached_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freakyfetch.cache");
        let original = sample();

        write_to(&path, &original).unwrap();

        let mut restored = SystemInfo::default();
        restored.ram_used_mib = 4096;
        restored.uptime_seconds = 42;
        assert!(read_from(&path, &mut restored));

        assert_eq!(restored.user, original.user);
        assert_eq!(restored.host, original.host);
        assert_eq!(restored.os_name, original.os_name);
        assert_eq!(restored.model, original.model);
        assert_eq!(restored.kernel, original.kernel);
        assert_eq!(restored.cpu_model, original.cpu_model);
        assert_eq!(restored.gpus, original.gpus);
        assert_eq!(restored.screen_width, 1920);
        assert_eq!(restored.screen_height, 1080);
        assert_eq!(restored.shell, original.shell);
        assert_eq!(restored.pkgs, 1234);
        assert_eq!(restored.pkgman_name, original.pkgman_name);

        // not cached
        assert_eq!(restored.ram_used_mib, 4096);
        assert_eq!(restored.uptime_seconds, 42);
        assert!(restored.image_path.is_empty());
    }

    #[test]
    fn written_file_uses_expected_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("freakyfetch.cache");
        write_to(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let keys: Vec<&str> = content
            .lines()
            .filter_map(|l| l.split_once('=').map(|(k, _)| k))
            .collect();
        assert_eq!(
            keys,
            vec![
                "user",
                "host",
                "version_name",
                "host_model",
                "kernel",
                "cpu",
                "screen_width",
                "screen_height",
                "shell",
                "pkgs",
                "pkgman_name",
                "gpu",
                "gpu",
            ]
        );
    }

    #[test]
    fn missing_cache_leaves_info_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut info = sample();
        assert!(!read_from(&dir.path().join("absent.cache"), &mut info));
        assert_eq!(info, sample());
    }

    #[test]
    fn directory_is_not_a_cache() {
        let dir = tempfile::tempdir().unwrap();
        let mut info = sample();
        assert!(!read_from(dir.path(), &mut info));
        assert_eq!(info, sample());
    }

    #[test]
    fn unknown_and_malformed_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freakyfetch.cache");
        fs::write(
            &path,
            "garbage\nversion=2\npkgs=lots\nuser=\ngpu=Radeon RX 6600\nhost=box\n",
        )
        .unwrap();

        let mut info = SystemInfo::default();
        info.pkgs = 7;
        info.user.set("prev");
        assert!(read_from(&path, &mut info));
        assert_eq!(info.pkgs, 7);
        assert_eq!(info.user, "prev");
        assert_eq!(info.host, "box");
        assert_eq!(info.gpu(0), Some("Radeon RX 6600"));
        assert_eq!(info.gpu(1), None);
    }

    #[test]
    fn oversized_values_are_truncated_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freakyfetch.cache");
        let long = "x".repeat(1000);
        fs::write(&path, format!("shell={}\n", long)).unwrap();

        let mut info = SystemInfo::default();
        assert!(read_from(&path, &mut info));
        assert_eq!(info.shell.len(), crate::data::system::SHELL_CAPACITY);
        assert!(long.starts_with(info.shell.as_str()));
    }
}
