// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! State Configurable Timer (SCT)

pub mod event;
pub mod registers;
pub mod sct;

pub use event::{
    ClockEdge, ClockMode, CombineMode, Counter, CounterHalf, DmaRequest, EventConfiguration,
    EventNumber, InputNumber, IoCondition, IoSelect, MatchNumber, OutputAction, OutputDirection,
    OutputNumber, StateUpdate, SCT_EVENT_COUNT, SCT_INPUT_COUNT, SCT_MATCH_COUNT,
    SCT_OUTPUT_COUNT, SCT_STATE_COUNT,
};
pub use registers::{EventRegisters, OutputRegisters, SctRegisters};
pub use sct::{Sct, SCT_BASE};
