//! # System Info Module / 系统信息模块
//!
//! Platform identification and the OS diagnostic commands relevant to how
//! the accelerators are attached.
//!
//! 平台标识以及与加速器连接方式相关的操作系统诊断命令。

use std::env;
use std::fs;

use crate::core::detect::AttachmentState;
use crate::infra::command::Invocation;

/// Kernel subsystem name of the Edge TPU PCIe driver.
pub const APEX_DRIVER: &str = "apex";
/// Vendor:device of the Edge TPU on PCIe.
pub const PCI_DEVICE_ID: &str = "1ac1:089a";
/// Vendor:device of the USB accelerator in normal operation.
pub const USB_STANDARD_ID: &str = "18d1:9302";
/// Vendor:device of the USB accelerator before its firmware is loaded (DFU mode).
pub const USB_DFU_ID: &str = "1a6e:089a";

/// A diagnostic command and how to echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Section title printed before the output.
    pub header: &'static str,
    pub invocation: Invocation,
    /// Only lines containing this text are echoed; empty echoes everything.
    pub filter: &'static str,
}

impl Diagnostic {
    fn new(header: &'static str, program: &str, args: &[&str], filter: &'static str) -> Self {
        Self {
            header,
            invocation: Invocation::new(program, args.iter().copied()),
            filter,
        }
    }
}

/// The diagnostics worth running for `state`. PCI takes precedence over USB.
pub fn diagnostics_for(state: &AttachmentState) -> Vec<Diagnostic> {
    if state.pci {
        vec![
            Diagnostic::new("TPU Kernel Messages", "dmesg", &[], APEX_DRIVER),
            Diagnostic::new("PCI Info", "lspci", &["-vvv", "-d", PCI_DEVICE_ID], ""),
        ]
    } else if state.usb {
        vec![
            Diagnostic::new("USB Devices", "lsusb", &[], ""),
            Diagnostic::new("USB Tree", "lsusb", &["-t"], ""),
            Diagnostic::new(
                "USB Detailed Info (TPU in standard mode)",
                "lsusb",
                &["-v", "-d", USB_STANDARD_ID],
                "",
            ),
            Diagnostic::new(
                "USB Detailed Info (TPU in DFU mode)",
                "lsusb",
                &["-v", "-d", USB_DFU_ID],
                "",
            ),
        ]
    } else {
        Vec::new()
    }
}

/// Whether OS diagnostics and sysfs temperatures are available here.
pub fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// A one-line platform description, e.g. `Linux-6.5.0-21-generic-x86_64`.
pub fn platform_string() -> String {
    let os = match env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        other => other,
    };
    match kernel_release() {
        Some(release) => format!("{os}-{release}-{}", env::consts::ARCH),
        None => format!("{os}-{}", env::consts::ARCH),
    }
}

fn kernel_release() -> Option<String> {
    let release = fs::read_to_string("/proc/sys/kernel/osrelease").ok()?;
    let release = release.trim();
    (!release.is_empty()).then(|| release.to_string())
}
