//! Package counts and package manager names

use std::fs;
use std::path::Path;

use crate::data::SystemInfo;
use crate::error::Result;
use crate::utils::command::{command_exists, run_command};
use crate::utils::file::file_exists;

/// Supported package managers, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pacman,
    Dpkg,
    Rpm,
    Xbps,
    Portage,
    Nix,
    Flatpak,
    Snap,
}

impl PackageManager {
    pub const ALL: [PackageManager; 8] = [
        PackageManager::Pacman,
        PackageManager::Dpkg,
        PackageManager::Rpm,
        PackageManager::Xbps,
        PackageManager::Portage,
        PackageManager::Nix,
        PackageManager::Flatpak,
        PackageManager::Snap,
    ];

    /// Name shown in the PKGS line before rewriting
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Pacman => "pacman",
            PackageManager::Dpkg => "dpkg",
            PackageManager::Rpm => "rpm",
            PackageManager::Xbps => "xbps",
            PackageManager::Portage => "emerge",
            PackageManager::Nix => "nix",
            PackageManager::Flatpak => "flatpak",
            PackageManager::Snap => "snap",
        }
    }

    fn count(self) -> Result<usize> {
        match self {
            PackageManager::Pacman => count_entries("/var/lib/pacman/local", |p| p.is_dir()),
            PackageManager::Dpkg => count_dpkg(),
            PackageManager::Rpm => count_lines("rpm", &["-qa"]),
            PackageManager::Xbps => count_lines("xbps-query", &["-l"]),
            PackageManager::Portage => count_portage(),
            PackageManager::Nix => count_lines(
                "nix-store",
                &["--query", "--requisites", "/run/current-system/sw"],
            ),
            PackageManager::Flatpak => count_entries("/var/lib/flatpak/app", |p| p.is_dir()),
            PackageManager::Snap => count_entries("/snap", |p| {
                p.is_dir() && p.file_name().map_or(false, |n| n != "bin")
            }),
        }
    }

    fn present(self) -> bool {
        match self {
            PackageManager::Pacman => file_exists("/var/lib/pacman/local"),
            PackageManager::Dpkg => file_exists("/var/lib/dpkg/status"),
            PackageManager::Rpm => file_exists("/var/lib/rpm") && command_exists("rpm"),
            PackageManager::Xbps => file_exists("/var/db/xbps") && command_exists("xbps-query"),
            PackageManager::Portage => file_exists("/var/db/pkg"),
            PackageManager::Nix => {
                file_exists("/run/current-system/sw") && command_exists("nix-store")
            }
            PackageManager::Flatpak => file_exists("/var/lib/flatpak/app"),
            PackageManager::Snap => file_exists("/snap"),
        }
    }
}

/// Fill the package count and the joined manager names
pub fn collect_packages(info: &mut SystemInfo) {
    let counts: Vec<(PackageManager, usize)> = PackageManager::ALL
        .into_iter()
        .filter(|pm| pm.present())
        .filter_map(|pm| match pm.count() {
            Ok(0) => None,
            Ok(n) => Some((pm, n)),
            Err(err) => {
                log::debug!("{} count failed: {}", pm.name(), err);
                None
            }
        })
        .collect();

    let (total, names) = summarize(&counts);
    info.pkgs = total;
    info.pkgman_name.set(&names);
}

/// Total count and `", "`-joined manager names
pub fn summarize(counts: &[(PackageManager, usize)]) -> (usize, String) {
    let total = counts.iter().map(|(_, n)| n).sum();
    let names = counts
        .iter()
        .map(|(pm, _)| pm.name())
        .collect::<Vec<_>>()
        .join(", ");
    (total, names)
}

fn count_entries(dir: &str, keep: impl Fn(&Path) -> bool) -> Result<usize> {
    Ok(fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| keep(&entry.path()))
        .count())
}

fn count_lines(program: &str, args: &[&str]) -> Result<usize> {
    let output = run_command(program, args)?;
    Ok(output.lines().filter(|line| !line.is_empty()).count())
}

fn count_dpkg() -> Result<usize> {
    let status = fs::read_to_string("/var/lib/dpkg/status")?;
    Ok(count_dpkg_installed(&status))
}

/// Installed entries of a dpkg status database
pub fn count_dpkg_installed(status: &str) -> usize {
    status
        .lines()
        .filter(|line| line.starts_with("Status: ") && line.ends_with(" installed"))
        .count()
}

fn count_portage() -> Result<usize> {
    let mut count = 0;
    for category in fs::read_dir("/var/db/pkg")?.filter_map(|e| e.ok()) {
        if category.path().is_dir() {
            if let Ok(packages) = fs::read_dir(category.path()) {
                count += packages.count();
            }
        }
    }
    Ok(count)
}
