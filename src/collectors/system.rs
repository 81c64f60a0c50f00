//! System information collection (user, OS, kernel, model, shell, uptime)

use std::collections::HashSet;
use std::ffi::CStr;
use std::fs;

use crate::data::SystemInfo;
use crate::error::{FreakyfetchError, Result};
use crate::utils::file::{file_exists, read_first_line};
use crate::utils::parsing::extract_assignment;

const DMI_DIR: &str = "/sys/devices/virtual/dmi/id";
const DEVICE_TREE_MODEL: &str = "/proc/device-tree/model";

/// Fill user and host
pub fn collect_user(info: &mut SystemInfo) {
    info.user.set(&get_username());
    match read_first_line("/proc/sys/kernel/hostname") {
        Ok(host) => {
            info.host.set(&host);
        }
        Err(err) => log::debug!("hostname: {}", err),
    }
}

/// Fill the OS id (unless already overridden) and the kernel string
pub fn collect_os(info: &mut SystemInfo, kernel: bool) {
    let uname = Uname::query();
    if info.os_name.is_empty() {
        info.os_name.set(&detect_os_id(uname.as_ref()));
    } else {
        log::debug!("os name overridden to '{}'", info.os_name);
    }

    if !kernel {
        return;
    }
    match uname {
        Some(ref u) => {
            info.kernel.set(&u.kernel_string());
        }
        None => log::debug!("uname failed, kernel left empty"),
    }
}

pub fn collect_model(info: &mut SystemInfo) {
    if let Some(model) = read_model() {
        info.model.set(&model);
    }
}

pub fn collect_shell(info: &mut SystemInfo) {
    info.shell.set(&get_shell());
}

/// Fill `uptime_seconds` from /proc/uptime
pub fn collect_uptime(info: &mut SystemInfo) {
    match read_first_line("/proc/uptime").map(|line| parse_uptime(&line)) {
        Ok(Some(secs)) => info.uptime_seconds = secs,
        Ok(None) => log::debug!("/proc/uptime unparsable"),
        Err(err) => log::debug!("uptime: {}", err),
    }
}

fn get_username() -> String {
    std::env::var("USER").unwrap_or_default()
}

/// Seconds from the first field of /proc/uptime
pub fn parse_uptime(line: &str) -> Option<u64> {
    line.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .map(|secs| secs as u64)
}

/// `ID=` value of an os-release file
pub fn parse_os_release_id(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| extract_assignment(line.trim(), "ID"))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn detect_os_id(uname: Option<&Uname>) -> String {
    let in_termux = std::env::var("PREFIX")
        .map(|p| p.contains("com.termux"))
        .unwrap_or(false);
    if in_termux {
        return "android".to_string();
    }
    if cfg!(target_os = "macos") {
        return "macos".to_string();
    }

    if let Some(id) = fs::read_to_string("/etc/os-release")
        .ok()
        .and_then(|content| parse_os_release_id(&content))
    {
        return id;
    }

    uname
        .map(|u| u.sysname.to_lowercase())
        .unwrap_or_default()
}

fn read_model() -> Option<String> {
    let read_dmi = |name: &str| {
        fs::read_to_string(format!("{}/{}", DMI_DIR, name))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    if let Some(name) = read_dmi("product_name") {
        return Some(match read_dmi("product_version") {
            Some(version) => format!("{} {}", name, version),
            None => name,
        });
    }

    if file_exists(DEVICE_TREE_MODEL) {
        return fs::read_to_string(DEVICE_TREE_MODEL)
            .ok()
            .map(|m| m.trim_end_matches('\0').trim().to_string())
            .filter(|m| !m.is_empty());
    }
    None
}

/// Fields of `uname(2)` the probes care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uname {
    pub sysname: String,
    pub release: String,
    pub machine: String,
}

impl Uname {
    pub fn query() -> Option<Self> {
        // SAFETY: uname fills the zeroed struct with NUL-terminated strings
        let raw = unsafe {
            let mut raw: libc::utsname = std::mem::zeroed();
            if libc::uname(&mut raw) != 0 {
                return None;
            }
            raw
        };
        let field = |chars: &[libc::c_char]| {
            // SAFETY: the kernel NUL-terminates every utsname field
            unsafe { CStr::from_ptr(chars.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        };
        Some(Self {
            sysname: field(&raw.sysname),
            release: field(&raw.release),
            machine: field(&raw.machine),
        })
    }

    /// `sysname release machine`, the form the kernel rewrite expects
    pub fn kernel_string(&self) -> String {
        format!("{} {} {}", self.sysname, self.release, self.machine)
    }
}

fn get_shell() -> String {
    // Walk up the process tree looking for a known shell
    let known_shells: HashSet<&str> = [
        "nushell", "fish", "bash", "zsh", "ksh", "mksh", "csh", "tcsh", "nu", "elvish", "xonsh",
    ]
    .into_iter()
    .collect();

    let mut current_pid = parent_pid("self");

    for _ in 0..10 {
        let Some(pid) = current_pid else { break };
        let next_pid = parent_pid(&pid.to_string());

        if let Ok(exe_link) = fs::read_link(format!("/proc/{}/exe", pid)) {
            if let Some(exe_name) = exe_link.file_name().and_then(|n| n.to_str()) {
                let exe_name = exe_name.to_lowercase();
                if known_shells.contains(exe_name.as_str()) {
                    return exe_name;
                }
            }
        }
        current_pid = next_pid;
    }

    shell_from_env().unwrap_or_default()
}

fn parent_pid(pid: &str) -> Option<u32> {
    let stat = fs::read_to_string(format!("/proc/{}/stat", pid)).ok()?;
    parse_ppid(&stat)
}

/// Parent pid from a /proc/<pid>/stat line, the comm field may contain spaces
pub fn parse_ppid(stat: &str) -> Option<u32> {
    let after_comm = &stat[stat.rfind(')')? + 1..];
    after_comm.split_whitespace().nth(1)?.parse().ok()
}

fn shell_from_env() -> Result<String> {
    let shell = std::env::var("SHELL")
        .map_err(|_| FreakyfetchError::detection("SHELL is not set"))?;
    shell
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FreakyfetchError::detection("SHELL is empty"))
}
