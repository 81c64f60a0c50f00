//! System-wide information structures

use super::text::BoundedText;

pub const USER_CAPACITY: usize = 128;
pub const HOST_CAPACITY: usize = 256;
pub const OS_NAME_CAPACITY: usize = 64;
pub const IMAGE_CAPACITY: usize = 256;
pub const MODEL_CAPACITY: usize = 256;
pub const KERNEL_CAPACITY: usize = 256;
pub const CPU_CAPACITY: usize = 256;
pub const GPU_CAPACITY: usize = 256;
pub const SHELL_CAPACITY: usize = 64;
pub const PKGMAN_CAPACITY: usize = 128;

/// Number of GPU slots, also the size of the GPU visibility mask
pub const MAX_GPUS: usize = 256;

pub type GpuName = BoundedText<GPU_CAPACITY>;

/// Terminal geometry, `0` means unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

/// Complete system information gathered by freakyfetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemInfo {
    pub user: BoundedText<USER_CAPACITY>,
    pub host: BoundedText<HOST_CAPACITY>,
    pub os_name: BoundedText<OS_NAME_CAPACITY>,
    pub image_path: BoundedText<IMAGE_CAPACITY>,
    pub model: BoundedText<MODEL_CAPACITY>,
    pub kernel: BoundedText<KERNEL_CAPACITY>,
    pub cpu_model: BoundedText<CPU_CAPACITY>,
    /// Detection order, never more than [`MAX_GPUS`] entries
    pub gpus: Vec<GpuName>,
    pub ram_used_mib: u64,
    pub ram_total_mib: u64,
    pub screen_width: u32,
    pub screen_height: u32,
    pub shell: BoundedText<SHELL_CAPACITY>,
    pub pkgs: usize,
    pub pkgman_name: BoundedText<PKGMAN_CAPACITY>,
    pub uptime_seconds: u64,
    pub terminal: TerminalSize,
}

impl SystemInfo {
    /// Append a GPU in the next free slot.
    ///
    /// Empty names are not stored, an empty slot means "absent". Returns
    /// `false` when the name is empty or every slot is taken.
    pub fn push_gpu(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if self.gpus.len() >= MAX_GPUS {
            log::warn!("all {} gpu slots are taken, dropping '{}'", MAX_GPUS, name);
            return false;
        }
        self.gpus.push(GpuName::from_str_truncated(name));
        true
    }

    /// GPU name at `index`, or `None` for an absent slot
    pub fn gpu(&self, index: usize) -> Option<&str> {
        self.gpus
            .get(index)
            .map(|g| g.as_str())
            .filter(|g| !g.is_empty())
    }

    pub fn has_resolution(&self) -> bool {
        self.screen_width != 0 || self.screen_height != 0
    }
}
