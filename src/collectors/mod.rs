//! System probes. Each probe failure leaves its field at the default.

pub mod hardware;
pub mod packages;
pub mod system;

use crate::config::ShowFlags;
use crate::data::SystemInfo;

/// Probe every field whose line is shown, one source after another.
///
/// The OS name is always probed since it selects the logo, unless
/// the config already overrode it.
pub fn collect_system_info(flags: &ShowFlags, info: &mut SystemInfo) {
    if flags.user {
        system::collect_user(info);
    }
    system::collect_os(info, flags.kernel);
    if flags.model {
        system::collect_model(info);
    }
    if flags.cpu {
        hardware::collect_cpu(info);
    }
    if flags.gpu {
        hardware::collect_gpus(info);
    }
    if flags.resolution {
        hardware::collect_resolution(info);
    }
    if flags.shell {
        system::collect_shell(info);
    }
    if flags.pkgs {
        packages::collect_packages(info);
    }
    refresh_volatile(flags, info);
}

/// RAM and uptime go stale between runs and are never cached
pub fn refresh_volatile(flags: &ShowFlags, info: &mut SystemInfo) {
    if flags.ram {
        hardware::collect_memory(info);
    }
    if flags.uptime {
        system::collect_uptime(info);
    }
}
