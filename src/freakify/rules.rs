//! Rewrite tables. Order is significant in every table.
//!
//! Substring tables run rule by rule, so a later rule sees the output of the
//! earlier ones ("Intel Core" goes through "core" before "intel").

/// (match, replacement)
pub type Rule = (&'static str, &'static str);

/// Label used when the OS name matches no rule
pub const GENERIC_OS_NAME: &str = "Ultra Freaky OS";

/// Exact, case-sensitive match against the whole OS name
pub const OS_RULES: &[Rule] = &[
    // linux
    ("alpine", "Freakpine"),
    ("amogos", "Freaky Imposter"),
    ("android", "Freakdroid"),
    ("arch", "Freaky Arch"),
    ("arcolinux", "Freaky Arco"),
    ("artix", "Freaky Artix"),
    ("debian", "Debfreakian"),
    ("devuan", "Freaky Devuan"),
    ("deepin", "Freaky Deepin"),
    ("endeavouros", "Freaky endeavouros"),
    ("EndeavourOS", "Freaky EndeavourOS"),
    ("fedora", "Freakdora"),
    ("femboyos", "Freaky Femboy"),
    ("gentoo", "Freaky Gentoo"),
    ("gnu", "Freaky GNU"),
    ("guix", "Freaky Guix"),
    ("linuxmint", "Linux FreakMint"),
    ("manjaro", "Freakjaro"),
    ("manjaro-arm", "Freakjaroo ARM"),
    ("neon", "Freakeon"),
    ("nixos", "Freaky NixOS"),
    ("opensuse-leap", "OpenFreakSuse"),
    ("opensuse-tumbleweed", "OpenFreakSuse Tumbleweed"),
    ("pop", "Freaky PopOS"),
    ("raspbian", "Raspfreakian"),
    ("rocky", "Freaky Rocky"),
    ("slackware", "Freaky Slackware"),
    ("solus", "Freaky Solus"),
    ("ubuntu", "Freakbuntu"),
    ("void", "Freaky void"),
    ("xerolinux", "Freaky Xero"),
    // BSD
    ("freebsd", "FreakBSD"),
    ("openbsd", "Freaky OpenBSD"),
    // Apple family
    ("macos", "Freaky macOS"),
    ("ios", "Freaky iOS"),
    // Windows
    ("windows", "Freakdows"),
];

/// Exact, case-sensitive match against each space-separated kernel token
pub const KERNEL_RULES: &[Rule] = &[
    ("Linux", "Freaky Linux"),
    ("linux", "Freaky Linux"),
    ("alpine", "Freakpine"),
    ("amogos", "Freaky Imposter"),
    ("android", "Freakdroid"),
    ("arch", "Freaky Arch"),
    ("artix", "Freaky Artix"),
    ("debian", "Debfreakian"),
    ("deepin", "Freaky Deepin"),
    ("endeavouros", "Freaky EndeavourOS"),
    ("EndeavourOS", "Freaky EndeavourOS"),
    ("fedora", "Freakdora"),
    ("femboyos", "Freaky Femboy"),
    ("gentoo", "Freaky Gentoo"),
    ("gnu", "Freaky GNU"),
    ("guix", "Freaky GUIX"),
    ("linuxmint", "Linx FreakMint"),
    ("manjaro", "Freakjaro"),
    ("manjaro-arm", "Freakjaro ARM"),
    ("neon", "Freakeon"),
    ("nixos", "Freaky NixOS"),
    ("opensuse-leap", "OpenFreakSUSE Leap"),
    ("opensuse-tumbleweed", "OpenFreakSUSE Tumbleweed"),
    ("pop", "Freaky PopOS"),
    ("raspbian", "Raspfreakian"),
    ("rocky", "Freaky Rocky"),
    ("slackware", "Freaky Slackware"),
    ("solus", "Freaky solus"),
    ("ubuntu", "Freakbuntu"),
    ("void", "Freaky void"),
    ("xerolinux", "Freaky Xero"),
    // BSD
    ("freebsd", "FreakBSD"),
    ("openbsd", "Freaky OpenBSD"),
    // Apple family
    ("macos", "Freaky macOS"),
    ("ios", "Freaky iOS"),
    // Windows
    ("windows", "Freakdows"),
];

/// Case-insensitive substring rules for CPU, GPU and model strings
pub const HARDWARE_RULES: &[Rule] = &[
    ("lenovo", "Freaky Lenovo"),
    ("cpu", "Freaky CPU"),
    ("core", "Freaky Core"),
    ("gpu", "Freaky GPU"),
    ("graphics", "Freaky Graphics"),
    ("corporation", "Freaky Corporation"),
    ("nvidia", "Freaky Nvidia"),
    ("mobile", "Freaky Mobile"),
    ("intel", "Freaky Intel"),
    ("celeron", "Freaky Celeron"),
    ("radeon", "Freaky Radeon"),
    ("geforce", "Freaky GeForce"),
    ("raspberry", "Freaky Raspberry"),
    ("broadcom", "Freaky Broadcom"),
    ("motorola", "Freaky Motorola"),
    ("proliant", "Freaky ProLiant"),
    ("poweredge", "Freaky PowerEdge"),
    ("apple", "Freaky Apple"),
    ("electronic", "Freaky Electronic"),
    ("processor", "Freaky Processor"),
    ("microsoft", "Freakysoft"),
    ("ryzen", "Freaky Ryzen"),
    ("advanced", "Freaky Advanced"),
    ("micro", "Freaky Micro"),
    ("devices", "Freaky Devices"),
    ("inc.", "Freaky inc."),
    ("lucienne", "Freaky Lucienne"),
    ("tuxedo", "Freaky Tuxedo"),
    ("aura", "+100 aura"),
];

/// Case-insensitive substring rules for package manager names.
/// apk, apt, guix, nix, pkg and xbps have no rewrite yet.
pub const PKGMAN_RULES: &[Rule] = &[
    ("brew-cask", "Freaky brew-cask"),
    ("brew-cellar", "Freaky brew-cellar"),
    ("emerge", "Freaky emerge"),
    ("flatpak", "Freakpak"),
    ("pacman", "Freaky pacman"),
    ("port", "Freaky port"),
    ("snap", "Freaky snap"),
];
