// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Registers that can be accessed as one 32-bit word or as two 16-bit halves.
//!
//! Several SCT registers back either one unified 32-bit counter or two
//! independent 16-bit counters. The hardware decodes halfword accesses to the
//! low half at the register address and to the high half at the register
//! address + 2, so a 16-bit store to one half never touches the other.
//!
//! `SplitRegister` owns the single 32-bit storage cell. The whole word is
//! accessed through the usual `tock-registers` interfaces, so bitfields
//! declared with `register_bitfields![u32, ...]` work on it directly. The
//! [`SplitRegister::low`] and [`SplitRegister::high`] views issue exactly one
//! 16-bit volatile access each and accept `register_bitfields![u16, ...]`
//! fields.

use core::cell::UnsafeCell;
use core::marker::PhantomData;
use core::ptr;

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::RegisterLongName;

// The half views rely on the low half living at the lower address.
const _: () = assert!(
    cfg!(target_endian = "little"),
    "split register halves assume a little-endian bus"
);

/// A 32-bit register with independent 16-bit halves.
///
/// `W` names the bitfields of the whole word, `H` those of either half.
#[repr(transparent)]
pub struct SplitRegister<W: RegisterLongName = (), H: RegisterLongName = ()> {
    value: UnsafeCell<u32>,
    associated_register: PhantomData<(W, H)>,
}

impl<W: RegisterLongName, H: RegisterLongName> SplitRegister<W, H> {
    /// The low half, bits 0..16 of the word.
    #[inline]
    pub fn low(&self) -> SplitHalf<'_, H> {
        SplitHalf {
            half: self.value.get().cast::<u16>(),
            associated_register: PhantomData,
        }
    }

    /// The high half, bits 16..32 of the word.
    #[inline]
    pub fn high(&self) -> SplitHalf<'_, H> {
        SplitHalf {
            // SAFETY: the storage cell is four bytes long, so the second
            // halfword is in bounds.
            half: unsafe { self.value.get().cast::<u16>().add(1) },
            associated_register: PhantomData,
        }
    }
}

impl<W: RegisterLongName, H: RegisterLongName> Readable for SplitRegister<W, H> {
    type T = u32;
    type R = W;

    #[inline]
    fn get(&self) -> u32 {
        // SAFETY: `value` is an aligned cell owned by this register.
        unsafe { ptr::read_volatile(self.value.get()) }
    }
}

impl<W: RegisterLongName, H: RegisterLongName> Writeable for SplitRegister<W, H> {
    type T = u32;
    type R = W;

    #[inline]
    fn set(&self, value: u32) {
        // SAFETY: `value` is an aligned cell owned by this register.
        unsafe { ptr::write_volatile(self.value.get(), value) }
    }
}

/// One 16-bit half of a [`SplitRegister`].
///
/// Every `get` is a single halfword load and every `set` a single halfword
/// store. `modify` is a halfword load followed by a halfword store, so the
/// sibling half is never part of the transaction.
pub struct SplitHalf<'a, H: RegisterLongName = ()> {
    half: *mut u16,
    associated_register: PhantomData<(&'a (), H)>,
}

impl<H: RegisterLongName> Readable for SplitHalf<'_, H> {
    type T = u16;
    type R = H;

    #[inline]
    fn get(&self) -> u16 {
        // SAFETY: `half` points into a live `SplitRegister` for `'a` and is
        // halfword aligned.
        unsafe { ptr::read_volatile(self.half) }
    }
}

impl<H: RegisterLongName> Writeable for SplitHalf<'_, H> {
    type T = u16;
    type R = H;

    #[inline]
    fn set(&self, value: u16) {
        // SAFETY: `half` points into a live `SplitRegister` for `'a` and is
        // halfword aligned.
        unsafe { ptr::write_volatile(self.half, value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::ReadWriteable;
    use tock_registers::register_bitfields;

    register_bitfields![u16,
        NIBBLES [
            LOW OFFSET(0) NUMBITS(4) [],
            HIGH OFFSET(12) NUMBITS(4) []
        ]
    ];

    fn split(value: u32) -> SplitRegister<(), NIBBLES::Register> {
        SplitRegister {
            value: UnsafeCell::new(value),
            associated_register: PhantomData,
        }
    }

    #[test]
    fn halves_map_to_word_bits() {
        let reg = split(0x1234_5678);
        assert_eq!(reg.low().get(), 0x5678);
        assert_eq!(reg.high().get(), 0x1234);
    }

    #[test]
    fn low_write_keeps_high_half() {
        let reg = split(0xDEAD_BEEF);
        reg.low().set(0x0001);
        assert_eq!(reg.get(), 0xDEAD_0001);
    }

    #[test]
    fn high_write_keeps_low_half() {
        let reg = split(0xDEAD_BEEF);
        reg.high().set(0xF00D);
        assert_eq!(reg.get(), 0xF00D_BEEF);
    }

    #[test]
    fn half_modify_only_touches_field() {
        let reg = split(0xAAAA_5555);
        reg.high().modify(NIBBLES::LOW.val(0xF));
        assert_eq!(reg.get(), 0xAAAF_5555);
        reg.low().modify(NIBBLES::HIGH.val(0x0));
        assert_eq!(reg.get(), 0xAAAF_0555);
    }
}
