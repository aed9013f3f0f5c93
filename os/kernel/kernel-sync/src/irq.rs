//! Interrupt masking.
//!
//! On bare-metal x86-64 (`target_os = "none"`) [`IrqGuard`] clears `IF` with
//! `cli` and restores it on drop. Everywhere else, including host test
//! builds, it is a no-op: user space may not execute `cli`.

/// `IF`, bit 9 of `RFLAGS`.
pub const RFLAGS_IF: u64 = 1 << 9;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod arch {
    #[inline]
    pub fn rflags() -> u64 {
        let r: u64;
        unsafe { core::arch::asm!("pushfq; pop {}", out(reg) r, options(nomem, preserves_flags)) };
        r
    }

    #[inline]
    pub fn disable() {
        unsafe { core::arch::asm!("cli", options(nomem, nostack)) };
    }

    #[inline]
    pub fn enable() {
        unsafe { core::arch::asm!("sti", options(nomem, nostack)) };
    }
}

#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
mod arch {
    #[inline]
    pub const fn rflags() -> u64 {
        0
    }

    #[inline]
    pub const fn disable() {}

    #[inline]
    pub const fn enable() {}
}

/// Whether maskable interrupts are currently enabled.
///
/// Always `false` off bare metal.
#[inline]
#[must_use]
pub fn interrupts_enabled() -> bool {
    arch::rflags() & RFLAGS_IF != 0
}

/// Masks interrupts while alive and restores the previous state on drop.
///
/// Nesting is fine: an inner guard sees interrupts already off and leaves
/// them off when it goes away.
#[must_use = "interrupts are restored as soon as the guard is dropped"]
pub struct IrqGuard {
    were_enabled: bool,
}

impl Default for IrqGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl IrqGuard {
    #[inline]
    pub fn new() -> Self {
        let were_enabled = interrupts_enabled();
        if were_enabled {
            arch::disable();
        }
        Self { were_enabled }
    }

    /// Whether dropping this guard re-enables interrupts.
    #[inline]
    #[must_use]
    pub const fn restores(&self) -> bool {
        self.were_enabled
    }
}

impl Drop for IrqGuard {
    fn drop(&mut self) {
        if self.were_enabled {
            arch::enable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_guard_is_inert() {
        let outer = IrqGuard::new();
        let inner = IrqGuard::new();
        assert!(!outer.restores());
        assert!(!inner.restores());
        assert!(!interrupts_enabled());
    }
}
