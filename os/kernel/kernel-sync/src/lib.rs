//! # Early-boot synchronization primitives
//!
//! * [`SpinLock`]: test-and-test-and-set lock with RAII guards, optionally
//!   taken with interrupts masked ([`SpinLock::lock_irq`]).
//! * [`SyncOnceCell`]: write-once cell for values decided during boot.
//! * [`IrqGuard`]: masks interrupts for its lifetime on bare-metal x86-64.
//!
//! Everything here works before there is a scheduler or a heap and compiles
//! to plain atomics on the host, so the crate's tests run under `cargo test`.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod irq;
mod spin_lock;
mod sync_once_cell;

pub use irq::IrqGuard;
pub use spin_lock::{IrqSpinLockGuard, SpinLock, SpinLockGuard};
pub use sync_once_cell::SyncOnceCell;
