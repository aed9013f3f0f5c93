//! # Solum kernel, early stage
//!
//! Everything between the boot stub handing over a Multiboot2 boot
//! descriptor and the kernel being able to tell the world about itself.
//! The freestanding binary (`src/main.rs`, feature `image`) is a thin shell
//! around [`boot::EarlyBoot`]; the logic lives here so it runs under host
//! tests.

#![cfg_attr(not(any(test, doctest)), no_std)]

pub mod boot;

pub use boot::{BANNER, EarlyBoot, Resolution, SinkPlan, announce, build_console};
