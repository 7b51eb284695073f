//! # Accelerator Detection Module / 加速器检测模块
//!
//! Interprets the output of `lstpu`, which prints one line per Edge TPU with
//! the bus it is attached to.
//!
//! 解析 `lstpu` 的输出，该工具为每个 Edge TPU 打印一行，包含其连接的总线。

/// Accelerator count and the buses they were seen on.
/// Computed once per run and read-only afterwards.
///
/// 加速器数量及其所在的总线。每次运行计算一次，之后只读。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentState {
    pub tpus: usize,
    pub pci: bool,
    pub usb: bool,
}

impl AttachmentState {
    /// A count taken on trust, with no bus information.
    pub fn assumed(tpus: usize) -> Self {
        Self {
            tpus,
            ..Self::default()
        }
    }

    /// Folds one detector output line into the state.
    pub fn observe(&mut self, line: &str) {
        if line.contains("PCI") {
            self.pci = true;
        }
        if line.contains("USB") {
            self.usb = true;
        }
        self.tpus += 1;
    }

    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = Self::default();
        for line in lines {
            state.observe(line);
        }
        state
    }
}
