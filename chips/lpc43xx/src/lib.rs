// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the NXP LPC43xx MCU family.

#![no_std]

pub mod sct;
pub mod split_register;
pub mod static_ref;

pub use static_ref::StaticRef;
