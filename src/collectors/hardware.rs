//! Hardware information collection (CPU, GPU, memory, screen)

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::SystemInfo;
use crate::error::{FreakyfetchError, Result};
use crate::utils::command::{command_exists, run_command};
use crate::utils::parsing::{extract_after_colon, parse_kb};

const DRM_DIR: &str = "/sys/class/drm";

pub fn collect_cpu(info: &mut SystemInfo) {
    match read_cpu_model() {
        Ok(cpu) => {
            info.cpu_model.set(&cpu);
        }
        Err(err) => log::debug!("cpu: {}", err),
    }
}

pub fn collect_gpus(info: &mut SystemInfo) {
    for gpu in detect_gpus() {
        info.push_gpu(&gpu);
    }
}

pub fn collect_resolution(info: &mut SystemInfo) {
    match read_resolution(Path::new(DRM_DIR)) {
        Some((width, height)) => {
            info.screen_width = width;
            info.screen_height = height;
        }
        None => log::debug!("no connected display found"),
    }
}

/// Fill used and total memory in MiB
pub fn collect_memory(info: &mut SystemInfo) {
    match read_memory() {
        Ok((used, total)) => {
            info.ram_used_mib = used;
            info.ram_total_mib = total;
        }
        Err(err) => log::debug!("memory: {}", err),
    }
}

fn read_cpu_model() -> Result<String> {
    let file = File::open("/proc/cpuinfo")?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.starts_with("model name") || line.starts_with("Hardware") {
            if let Some(model) = extract_after_colon(&line) {
                return Ok(model);
            }
        }
    }
    Err(FreakyfetchError::detection("CPU model not found"))
}

fn read_memory() -> Result<(u64, u64)> {
    let content = fs::read_to_string("/proc/meminfo")?;
    parse_meminfo(&content).ok_or_else(|| FreakyfetchError::detection("MemTotal not found"))
}

/// `(used, total)` in MiB, used being `MemTotal - MemAvailable`
pub fn parse_meminfo(content: &str) -> Option<(u64, u64)> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        if total.is_none() && line.starts_with("MemTotal:") {
            total = parse_kb(line);
        } else if available.is_none() && line.starts_with("MemAvailable:") {
            available = parse_kb(line);
        }
        if total.is_some() && available.is_some() {
            break;
        }
    }

    let total = total?;
    let used = total.saturating_sub(available.unwrap_or(0));
    Some((used / 1024, total / 1024))
}

fn detect_gpus() -> Vec<String> {
    if !command_exists("lspci") {
        log::debug!("lspci not in PATH, no gpus");
        return Vec::new();
    }
    match run_command("lspci", &[]) {
        Ok(output) => parse_lspci_gpus(&output),
        Err(err) => {
            log::debug!("lspci: {}", err);
            Vec::new()
        }
    }
}

/// Device text of every display controller in `lspci` output, revision stripped
pub fn parse_lspci_gpus(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .filter_map(|line| {
            // "00:02.0 VGA compatible controller: Intel Corporation ... (rev 0c)"
            let (_, device) = line.split_once(": ")?;
            let device = device.split(" (rev ").next().unwrap_or(device).trim();
            (!device.is_empty()).then(|| device.to_string())
        })
        .collect()
}

fn read_resolution(drm_dir: &Path) -> Option<(u32, u32)> {
    let mut connectors: Vec<_> = fs::read_dir(drm_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.join("status").is_file())
        .collect();
    connectors.sort();

    connectors.iter().find_map(|path| {
        let status = fs::read_to_string(path.join("status")).ok()?;
        if status.trim() != "connected" {
            return None;
        }
        let modes = fs::read_to_string(path.join("modes")).ok()?;
        modes.lines().next().and_then(parse_mode)
    })
}

/// Parse a DRM mode like `1920x1080`
pub fn parse_mode(mode: &str) -> Option<(u32, u32)> {
    let (width, height) = mode.trim().split_once('x')?;
    let height: String = height.chars().take_while(|c| c.is_ascii_digit()).collect();
    Some((width.parse().ok()?, height.parse().ok()?))
}
