//! freakyfetch library
//!
//! A system fetch that makes every name a little freakier.

pub mod cache;
pub mod cli;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod freakify;
pub mod utils;

pub use collectors::collect_system_info;
pub use config::{DisplayConfig, ShowFlags};
pub use data::{SystemInfo, TerminalSize};
pub use error::{FreakyfetchError, Result};

use std::path::Path;

/// Fill `info` from the cache in the home directory or from the probes.
///
/// Returns `true` when the cache should be (re)written afterwards.
pub fn gather(
    config: &DisplayConfig,
    info: &mut SystemInfo,
    read_cache: bool,
    write_cache: bool,
) -> bool {
    let cache_file = cache::cache_path();
    gather_from(cache_file.as_deref(), config, info, read_cache, write_cache)
}

/// Like [`gather`] with an explicit cache file.
///
/// With `read_cache`, a cache hit only re-probes RAM and uptime and asks for a
/// write only if `write_cache` is set. A miss probes everything and always asks
/// for a write.
pub fn gather_from(
    cache_file: Option<&Path>,
    config: &DisplayConfig,
    info: &mut SystemInfo,
    read_cache: bool,
    write_cache: bool,
) -> bool {
    if read_cache {
        if cache_file.map_or(false, |path| cache::read_from(path, info)) {
            log::info!("cache hit, refreshing uncached values");
            collectors::refresh_volatile(&config.show, info);
            return write_cache;
        }
        log::info!("no cache yet, probing and writing one");
    }
    collectors::collect_system_info(&config.show, info);
    read_cache || write_cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_config() -> DisplayConfig {
        let lines = "user=false\nhost=false\nkernel=false\ncpu=false\ngpus=false\n\
                     resolution=false\nshell=false\npkgs=false\n";
        DisplayConfig::parse(Cursor::new(lines), &mut SystemInfo::default())
    }

    fn cached() -> SystemInfo {
        let mut info = SystemInfo::default();
        info.user.set("cached-user");
        info.os_name.set("arch");
        info.kernel.set("Linux 6.9.1-arch1-1 x86_64");
        info.pkgs = 42;
        info
    }

    #[test]
    fn cache_hit_refreshes_ram_and_uptime_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freakyfetch.cache");
        cache::write_to(&path, &cached()).unwrap();

        let mut info = SystemInfo::default();
        let write = gather_from(Some(&path), &DisplayConfig::default(), &mut info, true, false);

        assert!(!write);
        assert_eq!(info.user, "cached-user");
        assert_eq!(info.kernel, "Linux 6.9.1-arch1-1 x86_64");
        assert_eq!(info.pkgs, 42);
        assert!(info.ram_total_mib > 0);
        assert!(info.uptime_seconds > 0);
    }

    #[test]
    fn cache_hit_writes_only_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freakyfetch.cache");
        cache::write_to(&path, &cached()).unwrap();

        let mut info = SystemInfo::default();
        assert!(gather_from(Some(&path), &quiet_config(), &mut info, true, true));
    }

    #[test]
    fn cache_miss_probes_and_forces_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.cache");

        let mut info = SystemInfo::default();
        let write = gather_from(Some(&path), &quiet_config(), &mut info, true, false);

        assert!(write);
        assert!(!info.os_name.is_empty());
        assert!(info.ram_total_mib > 0);
        assert!(info.user.is_empty());
    }

    #[test]
    fn no_cache_flags_collect_without_writing() {
        let mut info = SystemInfo::default();
        assert!(!gather_from(None, &quiet_config(), &mut info, false, false));
        assert!(!info.os_name.is_empty());
    }
}
