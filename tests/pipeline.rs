use std::fs;
use std::io::Cursor;

use freakyfetch::display::{
    reconcile_cursor, render_info_panel, template, LogoLayout, TemplateSearch, GENERIC_TEMPLATE,
    LOGO_HEIGHT,
};
use freakyfetch::{cache, freakify, DisplayConfig, FreakyfetchError, SystemInfo};

fn probed() -> SystemInfo {
    let mut info = SystemInfo::default();
    info.user.set("freak");
    info.host.set("station");
    info.model.set("Lenovo ThinkPad T14");
    info.kernel.set("Linux 6.9.1-arch1-1 x86_64");
    info.cpu_model.set("AMD Ryzen 7 5800X");
    info.push_gpu("NVIDIA Corporation GA107M [GeForce RTX 3050 Mobile]");
    info.screen_width = 1920;
    info.screen_height = 1080;
    info.shell.set("zsh");
    info.pkgs = 1212;
    info.pkgman_name.set("pacman, flatpak");
    info.ram_used_mib = 4096;
    info.ram_total_mib = 16000;
    info.uptime_seconds = 3_700;
    info
}

fn strip_escapes(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[test]
fn config_cache_freakify_render() {
    let dir = tempfile::tempdir().unwrap();

    let mut info = SystemInfo::default();
    let config = DisplayConfig::parse(
        Cursor::new("distro=arch\nshell=false\ncolors=false\n"),
        &mut info,
    );
    assert_eq!(info.os_name, "arch");

    let mut fresh = probed();
    fresh.os_name.set(&info.os_name);
    let cache_file = dir.path().join(".cache").join("freakyfetch.cache");
    cache::write_to(&cache_file, &fresh).unwrap();

    let mut restored = SystemInfo::default();
    assert!(cache::read_from(&cache_file, &mut restored));
    assert_eq!(restored.os_name, "arch");
    assert_eq!(restored.kernel, fresh.kernel.as_str());
    assert_eq!(restored.gpus, fresh.gpus);
    assert_eq!(restored.ram_used_mib, 0);
    restored.ram_used_mib = fresh.ram_used_mib;
    restored.ram_total_mib = fresh.ram_total_mib;
    restored.uptime_seconds = fresh.uptime_seconds;

    let layout = LogoLayout::for_os(&restored.os_name);
    freakify::freakify_all(&mut restored);
    assert_eq!(restored.kernel, "Freaky Linux 6.9.1-arch1-1 x86_64");
    assert_eq!(restored.cpu_model, "AMD Freaky Ryzen 7 5800X");
    assert_eq!(restored.pkgman_name, "Freaky pacman, Freakpak");

    let search = TemplateSearch {
        local_dir: dir.path().join("local"),
        install_dir: dir.path().join("installed"),
    };
    fs::create_dir_all(&search.install_dir).unwrap();
    fs::write(
        search.install_dir.join("arch.txt"),
        "{BLUE}   /\\\n{BLUE}  /  \\\n{BLUE} /____\\\n",
    )
    .unwrap();
    let logo = template::render(&search, &restored.os_name).unwrap();
    assert_eq!(logo.line_count, 4);

    let panel = render_info_panel(&config, &restored, 0, &layout);
    let lines: Vec<String> = panel.text.lines().map(strip_escapes).collect();
    assert_eq!(panel.line_count, 10);
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "freak@station");
    assert_eq!(lines[1], "OS     Freaky Arch");
    assert_eq!(lines[2], "MODEL  Freaky Lenovo ThinkPad T14");
    assert!(lines.iter().all(|l| !l.starts_with("SHELL")));
    assert_eq!(lines[9], "UPTIME 1h, 1m");

    assert_eq!(reconcile_cursor(LOGO_HEIGHT, panel.line_count), "\x1b[1A");
}

#[test]
fn unsupported_os_uses_generic_template_then_fails() {
    let dir = tempfile::tempdir().unwrap();
    let search = TemplateSearch {
        local_dir: dir.path().join("local"),
        install_dir: dir.path().join("installed"),
    };

    let err = template::render(&search, "templeos").unwrap_err();
    assert!(matches!(err, FreakyfetchError::RepeatedFallbackFailure { .. }));

    fs::create_dir_all(&search.local_dir).unwrap();
    fs::write(
        search.local_dir.join(format!("{}.txt", GENERIC_TEMPLATE)),
        "{PINK}?\n",
    )
    .unwrap();
    let logo = template::render(&search, "templeos").unwrap();
    assert_eq!(logo.line_count, 2);
}

#[test]
fn shipped_generic_template_is_logo_height() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("res")
        .join("ascii")
        .join(format!("{}.txt", GENERIC_TEMPLATE));
    let logo = template::render_file(&path).unwrap();
    assert_eq!(logo.line_count, LOGO_HEIGHT);
    assert!(!logo.text.contains('{'));
}
