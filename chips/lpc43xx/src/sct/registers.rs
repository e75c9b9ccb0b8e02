// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SCT register map.
//!
//! Offsets follow the LPC43xx user manual (UM10503, chapter "State
//! Configurable Timer"). Registers with `_L`/`_H` halves are
//! [`SplitRegister`]s; every other register is a plain 32-bit word.

use core::mem::{offset_of, size_of};

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::split_register::SplitRegister;

register_structs! {
    /// State Configurable Timer
    pub SctRegisters {
        /// SCT configuration register
        (0x000 => pub config: ReadWrite<u32, CONFIG::Register>),
        /// SCT control register. Only the low half is used when the counter
        /// is unified.
        (0x004 => pub control: SplitRegister<CTRL_U::Register, CTRL::Register>),
        /// Events that act as a counter limit, clearing or reversing the
        /// counter (LIMIT)
        (0x008 => pub clear_counter_on_event: SplitRegister<EVENTS_U::Register, EVENTS::Register>),
        /// Events that set the HALT bit (HALT)
        (0x00C => pub halt_on_event: SplitRegister<EVENTS_U::Register, EVENTS::Register>),
        /// Events that set the STOP bit (STOP)
        (0x010 => pub stop_on_event: SplitRegister<EVENTS_U::Register, EVENTS::Register>),
        /// Events that clear the STOP bit (START)
        (0x014 => pub start_on_event: SplitRegister<EVENTS_U::Register, EVENTS::Register>),
        (0x018 => _reserved0),
        /// Counter value
        (0x040 => pub count: SplitRegister),
        /// State value
        (0x044 => pub state: SplitRegister<STATE_U::Register, STATE::Register>),
        /// Raw and synchronized input states
        (0x048 => pub input: ReadOnly<u32, INPUT::Register>),
        /// Match (0) or capture (1) mode for each match/capture register
        (0x04C => pub register_mode: SplitRegister<REGS_U::Register, REGS::Register>),
        /// Output pin states
        (0x050 => pub output: ReadWrite<u32, OUTPUT::Register>),
        /// Set/clear swapping by counting direction, two bits per output
        (0x054 => pub output_direction_control: ReadWrite<u32>),
        /// Set/clear conflict resolution, two bits per output
        (0x058 => pub conflict_resolution: ReadWrite<u32>),
        /// DMA request 0 and 1 event masks
        (0x05C => pub dma_request_on_event: [ReadWrite<u32, DMAREQ::Register>; 2]),
        (0x064 => _reserved1),
        /// Interrupt enable per event (EVEN)
        (0x0F0 => pub interrupt_on_event: ReadWrite<u32, EVENT_MASK::Register>),
        /// Event flags, write 1 to clear (EVFLAG)
        (0x0F4 => pub event_occurred: ReadWrite<u32, EVENT_MASK::Register>),
        /// Conflict interrupt enable per output (CONEN)
        (0x0F8 => pub conflict_enable: ReadWrite<u32, OUTPUT::Register>),
        /// Conflict and bus error flags, write 1 to clear (CONFLAG)
        (0x0FC => pub conflict_flag: ReadWrite<u32, CONFLAG::Register>),
        /// Match values in match mode, captured counter values in capture mode
        (0x100 => pub match_capture: [SplitRegister; 16]),
        (0x140 => _reserved2),
        /// Low-half aliases of the match/capture registers
        (0x180 => pub match_alias_low: [ReadWrite<u32>; 16]),
        /// High-half aliases of the match/capture registers
        (0x1C0 => pub match_alias_high: [ReadWrite<u32>; 16]),
        /// Match reload values in match mode, capture event masks in capture
        /// mode
        (0x200 => pub capture_control: [SplitRegister<EVENTS_U::Register, EVENTS::Register>; 16]),
        (0x240 => _reserved3),
        /// Low-half aliases of the capture control registers
        (0x280 => pub capture_control_alias_low: [ReadWrite<u32>; 16]),
        /// High-half aliases of the capture control registers
        (0x2C0 => pub capture_control_alias_high: [ReadWrite<u32>; 16]),
        /// Event state masks and controls
        (0x300 => pub event: [EventRegisters; 16]),
        (0x380 => _reserved4),
        /// Output set and clear event masks
        (0x500 => pub output_on_event: [OutputRegisters; 16]),
        (0x580 => @END),
    },

    /// One event slot (EVn_STATE, EVn_CTRL)
    pub EventRegisters {
        /// Bit `n` enables the event in state `n`
        (0x0 => pub enabled_in_state: ReadWrite<u32>),
        (0x4 => pub control: ReadWrite<u32, EV_CTRL::Register>),
        (0x8 => @END),
    },

    /// One output's event masks (OUTn_SET, OUTn_CLR)
    pub OutputRegisters {
        /// Bit `n` drives the output high when event `n` fires
        (0x0 => pub set: ReadWrite<u32, EVENT_MASK::Register>),
        /// Bit `n` drives the output low when event `n` fires
        (0x4 => pub clear: ReadWrite<u32, EVENT_MASK::Register>),
        (0x8 => @END),
    }
}

// Documented anchors. Everything between two anchors is pinned down by the
// running offsets that `register_structs!` checks.
const _: () = assert!(
    offset_of!(SctRegisters, start_on_event) == 0x014,
    "start_on_event must be at 0x014"
);
const _: () = assert!(
    offset_of!(SctRegisters, count) == 0x040,
    "count must be at 0x040"
);
const _: () = assert!(
    offset_of!(SctRegisters, interrupt_on_event) == 0x0F0,
    "interrupt_on_event must be at 0x0F0"
);
const _: () = assert!(
    offset_of!(SctRegisters, match_alias_low) == 0x180,
    "match_alias_low must be at 0x180"
);
const _: () = assert!(
    offset_of!(SctRegisters, capture_control_alias_low) == 0x280,
    "capture_control_alias_low must be at 0x280"
);
const _: () = assert!(
    offset_of!(SctRegisters, event) == 0x300,
    "event must be at 0x300"
);
const _: () = assert!(
    offset_of!(SctRegisters, output_on_event) == 0x500,
    "output_on_event must be at 0x500"
);

const _: () = assert!(size_of::<SplitRegister>() == 4);
const _: () = assert!(size_of::<EventRegisters>() == 8);
const _: () = assert!(size_of::<OutputRegisters>() == 8);
const _: () = assert!(
    size_of::<SctRegisters>() == 0x580,
    "SCT register block must end at 0x580"
);

register_bitfields![u32,
    pub CONFIG [
        /// Operate as one 32-bit counter
        UNIFY OFFSET(0) NUMBITS(1) [],
        /// Clock source of the counter and prescaler
        CLKMODE OFFSET(1) NUMBITS(2) [
            /// Counter and prescaler run off the bus clock
            BusClock = 0,
            /// Bus clock, but the prescaler only advances on the selected
            /// input edge
            CountOnInput = 1,
            /// The selected input is the clock
            InputClock = 2
        ],
        /// Clock input select. Bit 3 is the edge, bits 4..7 the input number.
        CKSEL OFFSET(3) NUMBITS(4) [],
        /// Edge of the selected clock input
        CKSEL_EDGE OFFSET(3) NUMBITS(1) [
            Rising = 0,
            Falling = 1
        ],
        /// Clock input number
        CKSEL_INPUT OFFSET(4) NUMBITS(3) [],
        /// Do not reload the low (or unified) match registers from their
        /// reload registers on a limit
        NORELOAD_L OFFSET(7) NUMBITS(1) [],
        /// Do not reload the high match registers
        NORELOAD_H OFFSET(8) NUMBITS(1) [],
        /// Synchronize input `n` to the SCT clock
        INSYNC OFFSET(9) NUMBITS(8) [],
        /// Match 0 acts as a limit for the low (or unified) counter
        AUTOLIMIT_L OFFSET(17) NUMBITS(1) [],
        /// Match 0 acts as a limit for the high counter
        AUTOLIMIT_H OFFSET(18) NUMBITS(1) []
    ],
    pub CTRL_U [
        DOWN_L OFFSET(0) NUMBITS(1) [],
        STOP_L OFFSET(1) NUMBITS(1) [],
        HALT_L OFFSET(2) NUMBITS(1) [],
        CLRCTR_L OFFSET(3) NUMBITS(1) [],
        BIDIR_L OFFSET(4) NUMBITS(1) [],
        PRE_L OFFSET(5) NUMBITS(8) [],
        DOWN_H OFFSET(16) NUMBITS(1) [],
        STOP_H OFFSET(17) NUMBITS(1) [],
        HALT_H OFFSET(18) NUMBITS(1) [],
        CLRCTR_H OFFSET(19) NUMBITS(1) [],
        BIDIR_H OFFSET(20) NUMBITS(1) [],
        PRE_H OFFSET(21) NUMBITS(8) []
    ],
    pub EVENTS_U [
        EVENTS_L OFFSET(0) NUMBITS(16) [],
        EVENTS_H OFFSET(16) NUMBITS(16) []
    ],
    pub STATE_U [
        STATE_L OFFSET(0) NUMBITS(5) [],
        STATE_H OFFSET(16) NUMBITS(5) []
    ],
    pub REGS_U [
        REGS_L OFFSET(0) NUMBITS(16) [],
        REGS_H OFFSET(16) NUMBITS(16) []
    ],
    pub INPUT [
        /// Raw input states
        AIN OFFSET(0) NUMBITS(8) [],
        /// Input states after synchronization
        SIN OFFSET(16) NUMBITS(8) []
    ],
    pub OUTPUT [
        OUT OFFSET(0) NUMBITS(16) []
    ],
    pub DMAREQ [
        /// Events that set this DMA request
        DEV OFFSET(0) NUMBITS(16) [],
        /// Set the request when match registers reload
        DRL OFFSET(30) NUMBITS(1) [],
        /// Request state
        DRQ OFFSET(31) NUMBITS(1) []
    ],
    pub EVENT_MASK [
        EVENTS OFFSET(0) NUMBITS(16) []
    ],
    pub CONFLAG [
        /// Output `n` had a set/clear conflict
        NCFLAG OFFSET(0) NUMBITS(16) [],
        /// Halfword write to the low half while unified, or other bus error
        BUSERRL OFFSET(30) NUMBITS(1) [],
        /// Bus error on the high half
        BUSERRH OFFSET(31) NUMBITS(1) []
    ],
    pub EV_CTRL [
        /// Match register associated with the event
        MATCHSEL OFFSET(0) NUMBITS(4) [],
        /// Counter half the match condition uses when the counter is split
        HEVENT OFFSET(4) NUMBITS(1) [
            Low = 0,
            High = 1
        ],
        /// Whether IOSEL names an input or an output
        OUTSEL OFFSET(5) NUMBITS(1) [
            Input = 0,
            Output = 1
        ],
        /// Input or output number for the I/O condition
        IOSEL OFFSET(6) NUMBITS(4) [],
        /// I/O condition
        IOCOND OFFSET(10) NUMBITS(2) [
            Low = 0,
            Rise = 1,
            Fall = 2,
            High = 3
        ],
        /// How the match and I/O conditions combine
        COMBMODE OFFSET(12) NUMBITS(2) [
            MatchOrIo = 0,
            Match = 1,
            Io = 2,
            MatchAndIo = 3
        ],
        /// Load STATEV into the state register instead of adding it
        STATELD OFFSET(14) NUMBITS(1) [
            Add = 0,
            Load = 1
        ],
        /// State value loaded or added when the event fires
        STATEV OFFSET(15) NUMBITS(5) []
    ]
];

register_bitfields![u16,
    pub CTRL [
        /// Count down
        DOWN OFFSET(0) NUMBITS(1) [],
        /// Pause the counter. Events still fire and can clear STOP.
        STOP OFFSET(1) NUMBITS(1) [],
        /// Halt the counter. Only software can clear HALT.
        HALT OFFSET(2) NUMBITS(1) [],
        /// Clear the counter, self clearing
        CLRCTR OFFSET(3) NUMBITS(1) [],
        /// Reverse direction at the limit instead of wrapping to zero
        BIDIR OFFSET(4) NUMBITS(1) [
            Unidirectional = 0,
            Bidirectional = 1
        ],
        /// Prescaler, the counter clock divides by PRE + 1
        PRE OFFSET(5) NUMBITS(8) []
    ],
    pub EVENTS [
        MASK OFFSET(0) NUMBITS(16) []
    ],
    pub STATE [
        VALUE OFFSET(0) NUMBITS(5) []
    ],
    pub REGS [
        /// Bit `n` puts match/capture register `n` into capture mode
        CAPTURE OFFSET(0) NUMBITS(16) []
    ]
];
