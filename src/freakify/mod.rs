//! Freakify: themed rewriting of OS, kernel, hardware and package manager names

pub mod rules;

use crate::data::SystemInfo;
use rules::{Rule, GENERIC_OS_NAME, HARDWARE_RULES, KERNEL_RULES, OS_RULES, PKGMAN_RULES};

/// Kernel strings are split into at most this many tokens, the last one keeps the rest
pub const MAX_KERNEL_TOKENS: usize = 16;

/// Rewrite an OS identifier, unknown systems get the generic label
pub fn rewrite_os_name(name: &str) -> &'static str {
    exact_match(OS_RULES, name).unwrap_or(GENERIC_OS_NAME)
}

/// Rewrite every space-separated token of a kernel string.
///
/// Empty tokens from repeated spaces keep their slot, so spacing is preserved.
pub fn rewrite_kernel(kernel: &str) -> String {
    kernel
        .splitn(MAX_KERNEL_TOKENS, ' ')
        .map(|token| exact_match(KERNEL_RULES, token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn rewrite_hardware(text: &str) -> String {
    apply_substring_rules(HARDWARE_RULES, text)
}

pub fn rewrite_package_manager(text: &str) -> String {
    apply_substring_rules(PKGMAN_RULES, text)
}

/// Freakify kernel, GPUs, CPU, model and package manager in place.
///
/// The OS name is left alone, the panel rewrites it when printing.
pub fn freakify_all(info: &mut SystemInfo) {
    log::info!("freakifying everything");

    let kernel = rewrite_kernel(&info.kernel);
    info.kernel.set(&kernel);
    log::debug!("kernel: {}", info.kernel);

    for gpu in info.gpus.iter_mut().take_while(|g| !g.is_empty()) {
        let rewritten = rewrite_hardware(gpu);
        gpu.set(&rewritten);
    }

    let cpu = rewrite_hardware(&info.cpu_model);
    info.cpu_model.set(&cpu);
    log::debug!("cpu: {}", info.cpu_model);

    let model = rewrite_hardware(&info.model);
    info.model.set(&model);
    log::debug!("model: {}", info.model);

    let pkgman = rewrite_package_manager(&info.pkgman_name);
    info.pkgman_name.set(&pkgman);
    log::debug!("pkgman: {}", info.pkgman_name);
}

fn exact_match(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|(pattern, _)| *pattern == value)
        .map(|(_, replacement)| *replacement)
}

fn apply_substring_rules(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            replace_ignore_case(&acc, pattern, replacement)
        })
}

/// Replace every non-overlapping, ASCII case-insensitive occurrence of `pattern`.
///
/// Scanning resumes after the inserted replacement, so a replacement that
/// contains its own pattern is never matched again by the same rule.
pub fn replace_ignore_case(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    // ASCII lowercasing keeps byte offsets identical between `lower` and `text`
    let lower = text.to_ascii_lowercase();
    let needle = pattern.to_ascii_lowercase();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (pos, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..pos]);
        out.push_str(replacement);
        last = pos + needle.len();
    }
    out.push_str(&text[last..]);
    out
}
