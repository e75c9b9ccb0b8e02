// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Event, state and counter encodings for the SCT.
//!
//! The SCT is a Mealy machine with up to [`SCT_STATE_COUNT`] states and
//! [`SCT_EVENT_COUNT`] events. An event is only evaluated in states whose bit
//! is set in its state mask. When its predicate holds, it may load or add to
//! the state, and independently trigger every side-effect table keyed by its
//! event number (limit, halt, stop, start, capture, interrupt, DMA, outputs).

use tock_registers::LocalRegisterCopy;

use super::registers::EV_CTRL;

/// Number of event slots.
pub const SCT_EVENT_COUNT: usize = 16;
/// Number of addressable states. STATEV is five bits wide and EVn_STATE has
/// one bit per state, so all 32 are usable.
pub const SCT_STATE_COUNT: usize = 32;
/// Number of match/capture registers.
pub const SCT_MATCH_COUNT: usize = 16;
/// Number of SCT inputs.
pub const SCT_INPUT_COUNT: usize = 8;
/// Number of SCT outputs.
pub const SCT_OUTPUT_COUNT: usize = 16;

macro_rules! slot_number {
    ($(#[$attr:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Converts a raw slot index, or `None` if it is out of range.
            pub fn from_index(index: usize) -> Option<$name> {
                Self::ALL.get(index).copied()
            }

            pub fn index(self) -> usize {
                self as usize
            }

            /// The bit for this slot in a per-slot mask.
            pub fn mask(self) -> u32 {
                1 << (self as u32)
            }
        }
    };
}

slot_number! {
    /// One of the 16 event slots
    EventNumber {
        Event0 = 0, Event1 = 1, Event2 = 2, Event3 = 3,
        Event4 = 4, Event5 = 5, Event6 = 6, Event7 = 7,
        Event8 = 8, Event9 = 9, Event10 = 10, Event11 = 11,
        Event12 = 12, Event13 = 13, Event14 = 14, Event15 = 15,
    }
}

slot_number! {
    /// One of the 16 match/capture registers
    MatchNumber {
        Match0 = 0, Match1 = 1, Match2 = 2, Match3 = 3,
        Match4 = 4, Match5 = 5, Match6 = 6, Match7 = 7,
        Match8 = 8, Match9 = 9, Match10 = 10, Match11 = 11,
        Match12 = 12, Match13 = 13, Match14 = 14, Match15 = 15,
    }
}

slot_number! {
    /// One of the 8 SCT inputs
    InputNumber {
        Input0 = 0, Input1 = 1, Input2 = 2, Input3 = 3,
        Input4 = 4, Input5 = 5, Input6 = 6, Input7 = 7,
    }
}

slot_number! {
    /// One of the 16 SCT outputs
    OutputNumber {
        Output0 = 0, Output1 = 1, Output2 = 2, Output3 = 3,
        Output4 = 4, Output5 = 5, Output6 = 6, Output7 = 7,
        Output8 = 8, Output9 = 9, Output10 = 10, Output11 = 11,
        Output12 = 12, Output13 = 13, Output14 = 14, Output15 = 15,
    }
}

/// A 16-bit counter half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterHalf {
    Low,
    High,
}

/// The counter a register access or event refers to.
///
/// With UNIFY set there is one 32-bit counter, which is controlled through
/// the low halves of the split registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    Unified,
    Half(CounterHalf),
}

impl Counter {
    pub(crate) fn control_half(self) -> CounterHalf {
        match self {
            Counter::Unified => CounterHalf::Low,
            Counter::Half(half) => half,
        }
    }
}

/// CLKMODE
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ClockMode {
    BusClock = 0,
    CountOnInput = 1,
    InputClock = 2,
}

/// Edge of the clock input that advances the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ClockEdge {
    Rising = 0,
    Falling = 1,
}

/// I/O condition of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum IoCondition {
    Low = 0,
    Rise = 1,
    Fall = 2,
    High = 3,
}

/// How an event combines its match and I/O conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum CombineMode {
    MatchOrIo = 0,
    Match = 1,
    Io = 2,
    MatchAndIo = 3,
}

/// The pin an event's I/O condition watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoSelect {
    Input(InputNumber),
    Output(OutputNumber),
}

/// What a firing event does to the state register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateUpdate {
    /// Add the value to the current state. `Add(0)` leaves the state alone.
    Add(u8),
    /// Replace the current state.
    Load(u8),
}

/// Output action when set and clear requests for one output collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OutputAction {
    NoChange = 0,
    Set = 1,
    Clear = 2,
    Toggle = 3,
}

/// Whether an output's set and clear events swap while counting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OutputDirection {
    Independent = 0,
    ReverseWhenLowCountsDown = 1,
    ReverseWhenHighCountsDown = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DmaRequest {
    Request0 = 0,
    Request1 = 1,
}

/// Contents of one event slot, built in memory and written with
/// [`Sct::configure_event`](super::Sct::configure_event).
#[derive(Clone, Copy)]
pub struct EventConfiguration {
    enabled_in_state: u32,
    control: LocalRegisterCopy<u32, EV_CTRL::Register>,
}

impl EventConfiguration {
    /// An event that is enabled in no state, compares against match 0 of the
    /// low (or unified) counter and fires on match or a low level on input 0.
    pub fn new() -> Self {
        EventConfiguration {
            enabled_in_state: 0,
            control: LocalRegisterCopy::new(0),
        }
    }

    pub(crate) fn from_raw(enabled_in_state: u32, control: u32) -> Self {
        EventConfiguration {
            enabled_in_state,
            control: LocalRegisterCopy::new(control),
        }
    }

    /// Selects the match register and the counter it compares against.
    pub fn set_match(&mut self, match_number: MatchNumber, counter: Counter) {
        let half = match counter {
            Counter::Unified | Counter::Half(CounterHalf::Low) => EV_CTRL::HEVENT::Low,
            Counter::Half(CounterHalf::High) => EV_CTRL::HEVENT::High,
        };
        self.control
            .modify(EV_CTRL::MATCHSEL.val(match_number as u32) + half);
    }

    pub fn set_io_condition(&mut self, io: IoSelect, condition: IoCondition) {
        let (outsel, pin) = match io {
            IoSelect::Input(input) => (EV_CTRL::OUTSEL::Input, input as u32),
            IoSelect::Output(output) => (EV_CTRL::OUTSEL::Output, output as u32),
        };
        self.control.modify(
            outsel + EV_CTRL::IOSEL.val(pin) + EV_CTRL::IOCOND.val(condition as u32),
        );
    }

    pub fn set_combine_mode(&mut self, mode: CombineMode) {
        self.control.modify(EV_CTRL::COMBMODE.val(mode as u32));
    }

    /// Values above 31 are truncated to the 5-bit STATEV field.
    pub fn set_state_update(&mut self, update: StateUpdate) {
        let (stateld, value) = match update {
            StateUpdate::Add(value) => (EV_CTRL::STATELD::Add, value),
            StateUpdate::Load(value) => (EV_CTRL::STATELD::Load, value),
        };
        self.control
            .modify(stateld + EV_CTRL::STATEV.val(value as u32));
    }

    /// Enables the event in `state`, modulo [`SCT_STATE_COUNT`].
    pub fn enable_in_state(&mut self, state: u8) {
        self.enabled_in_state |= 1 << (state as usize % SCT_STATE_COUNT);
    }

    pub fn disable_in_state(&mut self, state: u8) {
        self.enabled_in_state &= !(1 << (state as usize % SCT_STATE_COUNT));
    }

    pub fn set_state_mask(&mut self, mask: u32) {
        self.enabled_in_state = mask;
    }

    /// EVn_STATE
    pub fn enabled_in_state(&self) -> u32 {
        self.enabled_in_state
    }

    /// EVn_CTRL
    pub fn control(&self) -> u32 {
        self.control.get()
    }

    pub fn match_number(&self) -> MatchNumber {
        // MATCHSEL is four bits wide, so every value names a register.
        MatchNumber::from_index(self.control.read(EV_CTRL::MATCHSEL) as usize)
            .unwrap_or(MatchNumber::Match0)
    }

    pub fn combine_mode(&self) -> CombineMode {
        match self.control.read(EV_CTRL::COMBMODE) {
            0 => CombineMode::MatchOrIo,
            1 => CombineMode::Match,
            2 => CombineMode::Io,
            _ => CombineMode::MatchAndIo,
        }
    }

    pub fn state_update(&self) -> StateUpdate {
        let value = self.control.read(EV_CTRL::STATEV) as u8;
        if self.control.is_set(EV_CTRL::STATELD) {
            StateUpdate::Load(value)
        } else {
            StateUpdate::Add(value)
        }
    }
}

impl Default for EventConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EventConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventConfiguration")
            .field("enabled_in_state", &format_args!("{:#010x}", self.enabled_in_state))
            .field("control", &format_args!("{:#010x}", self.control.get()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_numbers_round_trip_indices() {
        assert_eq!(EventNumber::from_index(3), Some(EventNumber::Event3));
        assert_eq!(EventNumber::from_index(15), Some(EventNumber::Event15));
        assert_eq!(EventNumber::from_index(16), None);
        assert_eq!(InputNumber::from_index(8), None);
        assert_eq!(MatchNumber::Match9.index(), 9);
        assert_eq!(OutputNumber::Output15.mask(), 0x8000);
    }

    #[test]
    fn default_event_is_disabled() {
        let config = EventConfiguration::new();
        assert_eq!(config.enabled_in_state(), 0);
        assert_eq!(config.control(), 0);
        assert_eq!(config.combine_mode(), CombineMode::MatchOrIo);
        assert_eq!(config.state_update(), StateUpdate::Add(0));
    }

    #[test]
    fn match_on_high_half_sets_hevent() {
        let mut config = EventConfiguration::new();
        config.set_match(MatchNumber::Match15, Counter::Half(CounterHalf::High));
        assert_eq!(config.control(), 0xF | 1 << 4);
        assert_eq!(config.match_number(), MatchNumber::Match15);

        config.set_match(MatchNumber::Match1, Counter::Unified);
        assert_eq!(config.control(), 0x1);
    }

    #[test]
    fn io_condition_on_output_sets_outsel() {
        let mut config = EventConfiguration::new();
        config.set_io_condition(IoSelect::Output(OutputNumber::Output9), IoCondition::Fall);
        assert_eq!(config.control(), 1 << 5 | 9 << 6 | 2 << 10);

        config.set_io_condition(IoSelect::Input(InputNumber::Input2), IoCondition::High);
        assert_eq!(config.control(), 2 << 6 | 3 << 10);
    }

    #[test]
    fn state_value_is_truncated_to_five_bits() {
        let mut config = EventConfiguration::new();
        config.set_state_update(StateUpdate::Load(33));
        assert_eq!(config.state_update(), StateUpdate::Load(1));
        config.set_state_update(StateUpdate::Add(31));
        assert_eq!(config.state_update(), StateUpdate::Add(31));
        assert_eq!(config.control(), 31 << 15);
    }

    #[test]
    fn state_mask_covers_all_states() {
        let mut config = EventConfiguration::new();
        config.enable_in_state(0);
        config.enable_in_state(31);
        assert_eq!(config.enabled_in_state(), 0x8000_0001);
        config.disable_in_state(0);
        assert_eq!(config.enabled_in_state(), 0x8000_0000);
        config.set_state_mask(u32::MAX);
        assert_eq!(config.enabled_in_state(), u32::MAX);
    }
}
