//! Display configuration loaded from the line-oriented config file

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::data::{SystemInfo, MAX_GPUS};

pub const APP_NAME: &str = "freakyfetch";

/// Visibility of each info line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowFlags {
    pub user: bool,
    pub os: bool,
    pub model: bool,
    pub kernel: bool,
    pub cpu: bool,
    /// Also gates GPU probing
    pub gpu: bool,
    pub ram: bool,
    pub resolution: bool,
    pub shell: bool,
    pub pkgs: bool,
    pub uptime: bool,
}

impl Default for ShowFlags {
    fn default() -> Self {
        Self {
            user: true,
            os: true,
            model: true,
            kernel: true,
            cpu: true,
            gpu: true,
            ram: true,
            resolution: true,
            shell: true,
            pkgs: true,
            uptime: true,
        }
    }
}

/// Per-run rendering policy
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub show: ShowFlags,
    pub show_colors: bool,
    pub show_image: bool,
    show_gpu: [bool; MAX_GPUS],
    show_gpus: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show: ShowFlags::default(),
            show_colors: true,
            show_image: false,
            show_gpu: [true; MAX_GPUS],
            show_gpus: true,
        }
    }
}

impl DisplayConfig {
    /// Load the config from `explicit`, or from the first default location that opens.
    ///
    /// A missing or unreadable file is not an error, the defaults are returned.
    /// `distro` and `image` lines write into `info`.
    pub fn load(explicit: Option<&Path>, info: &mut SystemInfo) -> Self {
        let candidates = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => config_candidates(dirs::home_dir(), std::env::var_os("PREFIX")),
        };

        for path in candidates {
            match File::open(&path) {
                Ok(file) => {
                    log::info!("parsing config {}", path.display());
                    return Self::parse(BufReader::new(file), info);
                }
                Err(err) => log::debug!("{}: {}", path.display(), err),
            }
        }

        log::info!("no config file found, using defaults");
        Self::default()
    }

    /// Parse config lines. Unrecognized lines are ignored.
    pub fn parse<R: BufRead>(reader: R, info: &mut SystemInfo) -> Self {
        let mut config = Self::default();
        for line in reader.lines() {
            match line {
                Ok(line) => config.apply_line(&line, info),
                Err(err) => {
                    log::debug!("stopped reading config: {}", err);
                    break;
                }
            }
        }
        log::debug!("os_name={} image={}", info.os_name, info.image_path);
        config
    }

    /// Evaluate one line against every recognized key
    pub fn apply_line(&mut self, line: &str, info: &mut SystemInfo) {
        if let Some(distro) = line
            .strip_prefix("distro=")
            .and_then(|v| v.split_whitespace().next())
        {
            info.os_name.set(distro);
        }

        if let Some(image) = line.strip_prefix("image=\"") {
            let image = image.split('"').next().unwrap_or_default();
            if !image.is_empty() {
                info.image_path.set(&shellexpand::tilde(image));
                self.show_image = true;
            }
        }

        if let Some(value) = bool_value(line, "user=") {
            self.show.user = value == "true";
        }
        if let Some(value) = bool_value(line, "os=") {
            self.show.os = value != "false";
        }
        if let Some(value) = bool_value(line, "host=") {
            self.show.model = value != "false";
        }
        if let Some(value) = bool_value(line, "kernel=") {
            self.show.kernel = value != "false";
        }
        if let Some(value) = bool_value(line, "cpu=") {
            self.show.cpu = value != "false";
        }
        if let Some(index) = line.strip_prefix("gpu=").and_then(scan_int) {
            self.hide_gpu(index);
        }
        if let Some(value) = bool_value(line, "gpus=") {
            self.set_gpus(value != "false");
        }
        if let Some(value) = bool_value(line, "ram=") {
            self.show.ram = value != "false";
        }
        if let Some(value) = bool_value(line, "resolution=") {
            self.show.resolution = value != "false";
        }
        if let Some(value) = bool_value(line, "shell=") {
            self.show.shell = value != "false";
        }
        if let Some(value) = bool_value(line, "pkgs=") {
            self.show.pkgs = value != "false";
        }
        if let Some(value) = bool_value(line, "uptime=") {
            self.show.uptime = value != "false";
        }
        if let Some(value) = bool_value(line, "colors=") {
            self.show_colors = value != "false";
        }
    }

    /// Hide one GPU slot. Out-of-range indexes are clamped into the mask.
    pub fn hide_gpu(&mut self, index: i64) {
        let max = (MAX_GPUS - 1) as i64;
        let clamped = if index > max {
            log::error!("gpu config index is too high, setting it to {}", max);
            max
        } else if index < 0 {
            log::error!("gpu config index is too low, setting it to 0");
            0
        } else {
            index
        };
        self.show_gpu[clamped as usize] = false;
    }

    /// Global GPU toggle. Turning it off hides every slot and disables GPU probing.
    pub fn set_gpus(&mut self, enabled: bool) {
        self.show_gpus = enabled;
        self.show.gpu = enabled;
        if !enabled {
            self.show_gpu = [false; MAX_GPUS];
        }
    }

    pub fn gpus_enabled(&self) -> bool {
        self.show_gpus
    }

    pub fn gpu_visible(&self, index: usize) -> bool {
        self.show_gpus && self.show_gpu.get(index).copied().unwrap_or(false)
    }

    pub fn gpu_mask(&self) -> &[bool; MAX_GPUS] {
        &self.show_gpu
    }
}

/// Default config locations, in lookup order
pub fn config_candidates(home: Option<PathBuf>, prefix: Option<OsString>) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(home) = home {
        candidates.push(home.join(".config").join(APP_NAME).join("config"));
    }
    if let Some(prefix) = prefix {
        candidates.push(PathBuf::from(prefix).join("etc").join(APP_NAME).join("config"));
    }
    candidates.push(Path::new("/etc").join(APP_NAME).join("config"));
    candidates
}

/// Leading run of `t r u e f a l s` after `key`, `None` when the run is empty
fn bool_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?;
    let end = rest
        .find(|c: char| !"truefals".contains(c))
        .unwrap_or(rest.len());
    Some(&rest[..end]).filter(|v| !v.is_empty())
}

/// Leading signed decimal integer, saturating on overflow
fn scan_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> (DisplayConfig, SystemInfo) {
        let mut info = SystemInfo::default();
        let config = DisplayConfig::parse(Cursor::new(text), &mut info);
        (config, info)
    }

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut info = SystemInfo::default();
        let config = DisplayConfig::load(Some(&dir.path().join("nope")), &mut info);

        assert_eq!(config.show, ShowFlags::default());
        assert!(config.show_colors);
        assert!(!config.show_image);
        assert!(config.gpu_mask().iter().all(|&v| v));
        assert!(config.gpus_enabled());
        assert_eq!(info, SystemInfo::default());
    }

    #[test]
    fn directory_as_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut info = SystemInfo::default();
        let config = DisplayConfig::load(Some(dir.path()), &mut info);

        assert_eq!(config, DisplayConfig::default());
        assert_eq!(info, SystemInfo::default());
    }

    #[test]
    fn load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "distro=arch\nkernel=false\n").unwrap();

        let mut info = SystemInfo::default();
        let config = DisplayConfig::load(Some(&path), &mut info);
        assert_eq!(info.os_name, "arch");
        assert!(!config.show.kernel);
    }

    #[test]
    fn boolean_keys_follow_true_false_rules() {
        let (config, _) = parse("os=false\nhost=false\ncpu=tru\nram=false\ncolors=false\n");
        assert!(!config.show.os);
        assert!(!config.show.model);
        assert!(config.show.cpu);
        assert!(!config.show.ram);
        assert!(!config.show_colors);
        assert!(config.show.kernel);
    }

    #[test]
    fn user_requires_exact_true() {
        assert!(parse("user=true").0.show.user);
        assert!(!parse("user=tru").0.show.user);
        assert!(!parse("user=false").0.show.user);
    }

    #[test]
    fn values_outside_the_scanset_are_ignored() {
        let (config, _) = parse("os=yes\nshell=0\n");
        assert!(config.show.os);
        assert!(config.show.shell);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let (config, info) = parse("# comment\nfoo=bar\n\nwallpaper=false\n");
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(info, SystemInfo::default());
    }

    #[test]
    fn distro_sets_os_name() {
        let (_, info) = parse("distro=debian extra words\n");
        assert_eq!(info.os_name, "debian");
    }

    #[test]
    fn image_enables_image_mode() {
        let (config, info) = parse("image=\"/usr/share/pixmaps/freaky.png\"\n");
        assert!(config.show_image);
        assert_eq!(info.image_path, "/usr/share/pixmaps/freaky.png");
    }

    #[test]
    fn image_expands_tilde() {
        let (_, info) = parse("image=\"~/pics/logo.png\"\n");
        assert!(info.image_path.ends_with("/pics/logo.png"));
        if dirs::home_dir().is_some() {
            assert!(!info.image_path.starts_with('~'));
        }
    }

    #[test]
    fn gpu_hides_single_slot() {
        let (config, _) = parse("gpu=2\n");
        assert!(!config.gpu_visible(2));
        assert!(config.gpu_visible(0));
        assert!(config.gpu_visible(1));
        assert!(config.gpu_visible(3));
        assert_eq!(config.gpu_mask().iter().filter(|&&v| !v).count(), 1);
    }

    #[test]
    fn gpus_false_hides_every_slot() {
        let (config, _) = parse("gpu=2\ngpus=false\n");
        assert!(config.gpu_mask().iter().all(|&v| !v));
        assert!(!config.show.gpu);
        assert!(!config.gpus_enabled());
        assert!(!config.gpu_visible(0));
    }

    #[test]
    fn gpus_true_keeps_gpu_detection_enabled() {
        let (config, _) = parse("gpus=true\n");
        assert!(config.show.gpu);
        assert!(config.gpu_visible(7));
    }

    #[test]
    fn gpu_index_is_clamped() {
        let (config, _) = parse("gpu=999\n");
        assert!(!config.gpu_visible(255));
        let (config, _) = parse("gpu=-4\n");
        assert!(!config.gpu_visible(0));
        let (config, _) = parse("gpu=abc\n");
        assert!(config.gpu_mask().iter().all(|&v| v));
    }

    #[test]
    fn candidates_follow_lookup_order() {
        let candidates = config_candidates(
            Some(PathBuf::from("/home/freak")),
            Some(OsString::from("/data/data/com.termux/files/usr")),
        );
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/home/freak/.config/freakyfetch/config"),
                PathBuf::from("/data/data/com.termux/files/usr/etc/freakyfetch/config"),
                PathBuf::from("/etc/freakyfetch/config"),
            ]
        );
        assert_eq!(config_candidates(None, None), vec![PathBuf::from("/etc/freakyfetch/config")]);
    }

    #[test]
    fn scan_int_accepts_sign_and_saturates() {
        assert_eq!(scan_int("12abc"), Some(12));
        assert_eq!(scan_int(" -3"), Some(-3));
        assert_eq!(scan_int("x"), None);
        assert_eq!(scan_int("99999999999999999999999"), Some(i64::MAX));
    }
}
