// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! State Configurable Timer, LPC43xx
//!
//! `Sct` binds the register map to one base address and offers typed access
//! to the state machine tables. It performs no semantic validation: any
//! combination of values the register fields can hold is written as is, and
//! making sense of them is left to the timer, PWM or capture driver built on
//! top.
//!
//! Every method issues a fixed sequence of volatile accesses of the declared
//! width. Field updates are read-modify-write on the containing register (or
//! register half) and leave all other bits untouched. `Sct` does no locking,
//! so the owning driver must not share it between execution contexts.

use log::trace;

use tock_registers::fields::Field;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::{LocalRegisterCopy, RegisterLongName};

use super::event::{
    ClockEdge, ClockMode, Counter, CounterHalf, DmaRequest, EventConfiguration, EventNumber,
    InputNumber, MatchNumber, OutputAction, OutputDirection, OutputNumber,
};
use super::registers::{
    SctRegisters, CONFIG, CONFLAG, CTRL, DMAREQ, EVENTS, EVENT_MASK, INPUT, OUTPUT, REGS, STATE,
};
use crate::split_register::{SplitHalf, SplitRegister};
use crate::static_ref::StaticRef;

pub const SCT_BASE: StaticRef<SctRegisters> =
    unsafe { StaticRef::new(0x4000_0000 as *const SctRegisters) };

fn half_of<W: RegisterLongName, H: RegisterLongName>(
    register: &SplitRegister<W, H>,
    half: CounterHalf,
) -> SplitHalf<'_, H> {
    match half {
        CounterHalf::Low => register.low(),
        CounterHalf::High => register.high(),
    }
}

/// Two-bit per-output field in OUTPUTDIRCTRL and RES.
fn output_pair(output: OutputNumber) -> Field<u32, ()> {
    Field::new(0b11, 2 * output.index())
}

pub struct Sct {
    registers: StaticRef<SctRegisters>,
}

impl Sct {
    pub const fn new(registers: StaticRef<SctRegisters>) -> Sct {
        Sct { registers }
    }

    /// Raw register map, for field-level access not covered here.
    pub fn registers(&self) -> &SctRegisters {
        &self.registers
    }

    // Counter and clock configuration

    /// Selects the counter clock. The edge and input are ignored by the
    /// hardware in [`ClockMode::BusClock`].
    pub fn set_clock(&self, mode: ClockMode, edge: ClockEdge, input: InputNumber) {
        trace!("sct: clock {:?} {:?} {:?}", mode, edge, input);
        self.registers.config.modify(
            CONFIG::CLKMODE.val(mode as u32)
                + CONFIG::CKSEL_EDGE.val(edge as u32)
                + CONFIG::CKSEL_INPUT.val(input as u32),
        );
    }

    /// Runs the counter as one 32-bit counter, or as two 16-bit counters.
    pub fn set_unified(&self, unified: bool) {
        self.registers.config.modify(CONFIG::UNIFY.val(unified as u32));
    }

    pub fn is_unified(&self) -> bool {
        self.registers.config.is_set(CONFIG::UNIFY)
    }

    /// Keeps the match registers of `counter` from reloading on a limit.
    pub fn set_reload_prevented(&self, counter: Counter, prevented: bool) {
        let field = match counter.control_half() {
            CounterHalf::Low => CONFIG::NORELOAD_L,
            CounterHalf::High => CONFIG::NORELOAD_H,
        };
        self.registers.config.modify(field.val(prevented as u32));
    }

    /// Makes match 0 act as the limit of `counter`.
    pub fn set_auto_limit(&self, counter: Counter, enabled: bool) {
        let field = match counter.control_half() {
            CounterHalf::Low => CONFIG::AUTOLIMIT_L,
            CounterHalf::High => CONFIG::AUTOLIMIT_H,
        };
        self.registers.config.modify(field.val(enabled as u32));
    }

    /// Bit `n` synchronizes input `n` to the SCT clock.
    pub fn set_input_synchronization(&self, inputs: u8) {
        self.registers
            .config
            .modify(CONFIG::INSYNC.val(inputs as u32));
    }

    // Counter control

    fn control(&self, counter: Counter) -> SplitHalf<'_, CTRL::Register> {
        half_of(&self.registers.control, counter.control_half())
    }

    /// Halts the counter. Events stop firing until software clears HALT.
    pub fn halt(&self, counter: Counter) {
        self.control(counter).modify(CTRL::HALT::SET);
    }

    /// Pauses the counter. Events keep firing and can restart it.
    pub fn stop(&self, counter: Counter) {
        self.control(counter).modify(CTRL::STOP::SET);
    }

    /// Clears both STOP and HALT.
    pub fn start(&self, counter: Counter) {
        self.control(counter)
            .modify(CTRL::STOP::CLEAR + CTRL::HALT::CLEAR);
    }

    pub fn is_halted(&self, counter: Counter) -> bool {
        self.control(counter).is_set(CTRL::HALT)
    }

    pub fn is_stopped(&self, counter: Counter) -> bool {
        self.control(counter).is_set(CTRL::STOP)
    }

    pub fn clear_counter(&self, counter: Counter) {
        self.control(counter).modify(CTRL::CLRCTR::SET);
    }

    pub fn set_counting_down(&self, counter: Counter, down: bool) {
        self.control(counter).modify(CTRL::DOWN.val(down as u16));
    }

    /// Counts back down from the limit instead of wrapping to zero.
    pub fn set_bidirectional(&self, counter: Counter, bidirectional: bool) {
        self.control(counter)
            .modify(CTRL::BIDIR.val(bidirectional as u16));
    }

    /// The counter clock is divided by `prescaler + 1`.
    pub fn set_prescaler(&self, counter: Counter, prescaler: u8) {
        self.control(counter)
            .modify(CTRL::PRE.val(prescaler as u16));
    }

    pub fn prescaler(&self, counter: Counter) -> u8 {
        self.control(counter).read(CTRL::PRE) as u8
    }

    pub fn count(&self, counter: Counter) -> u32 {
        match counter {
            Counter::Unified => self.registers.count.get(),
            Counter::Half(half) => half_of(&self.registers.count, half).get() as u32,
        }
    }

    /// Only takes effect while the counter is halted.
    pub fn set_count(&self, counter: Counter, value: u32) {
        match counter {
            Counter::Unified => self.registers.count.set(value),
            Counter::Half(half) => half_of(&self.registers.count, half).set(value as u16),
        }
    }

    pub fn state(&self, counter: Counter) -> u8 {
        half_of(&self.registers.state, counter.control_half()).read(STATE::VALUE) as u8
    }

    /// Only takes effect while the counter is halted.
    pub fn set_state(&self, counter: Counter, state: u8) {
        half_of(&self.registers.state, counter.control_half())
            .write(STATE::VALUE.val(state as u16));
    }

    /// Raw input levels, bit `n` for input `n`.
    pub fn raw_inputs(&self) -> u8 {
        self.registers.input.read(INPUT::AIN) as u8
    }

    /// Input levels after synchronization.
    pub fn synchronized_inputs(&self) -> u8 {
        self.registers.input.read(INPUT::SIN) as u8
    }

    // Match and capture registers

    pub fn set_capture_mode(&self, match_number: MatchNumber, counter: Counter, capture: bool) {
        let bit = match_number.mask() as u16;
        let mode = half_of(&self.registers.register_mode, counter.control_half());
        let current = mode.get();
        mode.set(if capture { current | bit } else { current & !bit });
    }

    pub fn is_capture_mode(&self, match_number: MatchNumber, counter: Counter) -> bool {
        let mode = half_of(&self.registers.register_mode, counter.control_half());
        mode.read(REGS::CAPTURE) & match_number.mask() as u16 != 0
    }

    /// Match value, or the last captured value in capture mode.
    pub fn match_value(&self, match_number: MatchNumber, counter: Counter) -> u32 {
        let register = &self.registers.match_capture[match_number.index()];
        match counter {
            Counter::Unified => register.get(),
            Counter::Half(half) => half_of(register, half).get() as u32,
        }
    }

    /// Writes a match value. For a half counter only the low 16 bits of
    /// `value` are used.
    pub fn set_match_value(&self, match_number: MatchNumber, counter: Counter, value: u32) {
        let register = &self.registers.match_capture[match_number.index()];
        match counter {
            Counter::Unified => register.set(value),
            Counter::Half(half) => half_of(register, half).set(value as u16),
        }
    }

    /// Writes the value the match register reloads from at each limit.
    pub fn set_match_reload(&self, match_number: MatchNumber, counter: Counter, value: u32) {
        let register = &self.registers.capture_control[match_number.index()];
        match counter {
            Counter::Unified => register.set(value),
            Counter::Half(half) => half_of(register, half).set(value as u16),
        }
    }

    /// Events that capture `counter` into a register in capture mode.
    pub fn set_capture_events(&self, match_number: MatchNumber, counter: Counter, events: u16) {
        let register = &self.registers.capture_control[match_number.index()];
        half_of(register, counter.control_half()).write(EVENTS::MASK.val(events));
    }

    // Event tables

    /// Writes EVn_STATE, then EVn_CTRL.
    pub fn configure_event(&self, event: EventNumber, config: &EventConfiguration) {
        trace!("sct: configure {:?} {:?}", event, config);
        let slot = &self.registers.event[event.index()];
        slot.enabled_in_state.set(config.enabled_in_state());
        slot.control.set(config.control());
    }

    pub fn event_configuration(&self, event: EventNumber) -> EventConfiguration {
        let slot = &self.registers.event[event.index()];
        EventConfiguration::from_raw(slot.enabled_in_state.get(), slot.control.get())
    }

    /// Masks the event out of every state.
    pub fn disable_event(&self, event: EventNumber) {
        self.registers.event[event.index()].enabled_in_state.set(0);
    }

    /// Events that act as the limit of `counter`.
    pub fn set_limit_events(&self, counter: Counter, events: u16) {
        half_of(&self.registers.clear_counter_on_event, counter.control_half())
            .write(EVENTS::MASK.val(events));
    }

    pub fn set_halt_events(&self, counter: Counter, events: u16) {
        half_of(&self.registers.halt_on_event, counter.control_half())
            .write(EVENTS::MASK.val(events));
    }

    pub fn set_stop_events(&self, counter: Counter, events: u16) {
        half_of(&self.registers.stop_on_event, counter.control_half())
            .write(EVENTS::MASK.val(events));
    }

    pub fn set_start_events(&self, counter: Counter, events: u16) {
        half_of(&self.registers.start_on_event, counter.control_half())
            .write(EVENTS::MASK.val(events));
    }

    // Outputs

    pub fn outputs(&self) -> u16 {
        self.registers.output.read(OUTPUT::OUT) as u16
    }

    /// Only takes effect while both counters are halted.
    pub fn set_outputs(&self, outputs: u16) {
        self.registers.output.write(OUTPUT::OUT.val(outputs as u32));
    }

    /// Events in `set` drive the output high, events in `clear` drive it low.
    pub fn set_output_events(&self, output: OutputNumber, set: u16, clear: u16) {
        trace!("sct: {:?} set={:#06x} clear={:#06x}", output, set, clear);
        let slot = &self.registers.output_on_event[output.index()];
        slot.set.write(EVENT_MASK::EVENTS.val(set as u32));
        slot.clear.write(EVENT_MASK::EVENTS.val(clear as u32));
    }

    pub fn set_output_direction(&self, output: OutputNumber, direction: OutputDirection) {
        self.registers
            .output_direction_control
            .modify(output_pair(output).val(direction as u32));
    }

    pub fn set_conflict_resolution(&self, output: OutputNumber, action: OutputAction) {
        self.registers
            .conflict_resolution
            .modify(output_pair(output).val(action as u32));
    }

    // Interrupts, DMA and status

    pub fn enable_interrupt(&self, event: EventNumber) {
        let enabled = self.registers.interrupt_on_event.get();
        self.registers
            .interrupt_on_event
            .set(enabled | event.mask());
    }

    pub fn disable_interrupt(&self, event: EventNumber) {
        let enabled = self.registers.interrupt_on_event.get();
        self.registers
            .interrupt_on_event
            .set(enabled & !event.mask());
    }

    /// Reads the event flags and clears exactly the ones that were read.
    pub fn take_fired_events(&self) -> u16 {
        let fired = self.registers.event_occurred.read(EVENT_MASK::EVENTS);
        if fired != 0 {
            self.registers
                .event_occurred
                .write(EVENT_MASK::EVENTS.val(fired));
        }
        fired as u16
    }

    pub fn set_conflict_interrupt(&self, output: OutputNumber, enabled: bool) {
        let current = self.registers.conflict_enable.get();
        let updated = if enabled {
            current | output.mask()
        } else {
            current & !output.mask()
        };
        self.registers.conflict_enable.set(updated);
    }

    /// Reads the conflict and bus error flags and clears those that were set.
    pub fn take_conflicts(&self) -> LocalRegisterCopy<u32, CONFLAG::Register> {
        let flags = self.registers.conflict_flag.extract();
        if flags.get() != 0 {
            trace!("sct: conflicts {:#010x}", flags.get());
            self.registers.conflict_flag.set(flags.get());
        }
        flags
    }

    /// Events in `events` raise the DMA request. With `on_reload` the request
    /// is also raised when the match registers reload.
    pub fn set_dma_request(&self, request: DmaRequest, events: u16, on_reload: bool) {
        self.registers.dma_request_on_event[request as usize]
            .write(DMAREQ::DEV.val(events as u32) + DMAREQ::DRL.val(on_reload as u32));
    }

    pub fn is_dma_request_pending(&self, request: DmaRequest) -> bool {
        self.registers.dma_request_on_event[request as usize].is_set(DMAREQ::DRQ)
    }
}
