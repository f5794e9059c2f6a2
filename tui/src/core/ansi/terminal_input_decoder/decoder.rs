// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence decoder implemented as a Mealy machine over one rune at a time.
//!
//! ```text
//! ┌────────┐ ESC ┌───────────┐  [  ┌────────────┐ 1..=8 ┌─────────────┐
//! │ Ground │────▶│ SawEscape │────▶│ SawBracket │──────▶│ SawDigit(d) │
//! └────────┘     └───────────┘     └────────────┘       └─────────────┘
//!   ▲  │ other        │ other        │ A B C D F H          │ ~
//!   │  ▼ emit char    ▼ invalid      ▼ emit key             ▼ emit key
//! ```
//!
//! Every transition that emits a key or reports an invalid sequence lands back in
//! [`DecoderState::Ground`], so no state leaks from one key into the next.

use super::{DecodeError, Key, KeyDecoder, RuneReader};
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR, ARROW_DOWN_FINAL,
            ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL, DELETE_CODE, END_CODE_1,
            END_CODE_2, END_FINAL, FUNCTION_KEY_DIGIT_MAX, FUNCTION_KEY_DIGIT_MIN,
            HOME_CODE_1, HOME_CODE_2, HOME_FINAL, PAGE_DOWN_CODE, PAGE_UP_CODE};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    #[default]
    Ground,
    SawEscape,
    SawBracket,
    /// Holds the parameter digit value (`1..=8`), not its ASCII byte.
    SawDigit(u8),
}

/// Output of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Emit(Key),
    Pending,
    Invalid(char),
}

impl DecoderState {
    /// Feed one rune. Pure: returns the next state and what (if anything) to emit.
    #[must_use]
    pub fn step(self, rune: char) -> (DecoderState, StepOutcome) {
        let byte = u8::try_from(rune).ok();
        match self {
            DecoderState::Ground => match byte {
                Some(ANSI_ESC) => (DecoderState::SawEscape, StepOutcome::Pending),
                _ => (DecoderState::Ground, StepOutcome::Emit(Key::Char(rune))),
            },
            DecoderState::SawEscape => match byte {
                Some(ANSI_CSI_BRACKET) => (DecoderState::SawBracket, StepOutcome::Pending),
                _ => (DecoderState::Ground, StepOutcome::Invalid(rune)),
            },
            DecoderState::SawBracket => match byte {
                Some(ARROW_UP_FINAL) => emit(Key::ArrowUp),
                Some(ARROW_DOWN_FINAL) => emit(Key::ArrowDown),
                Some(ARROW_RIGHT_FINAL) => emit(Key::ArrowRight),
                Some(ARROW_LEFT_FINAL) => emit(Key::ArrowLeft),
                Some(END_FINAL) => emit(Key::End),
                Some(HOME_FINAL) => emit(Key::Home),
                Some(digit @ FUNCTION_KEY_DIGIT_MIN..=FUNCTION_KEY_DIGIT_MAX) => (
                    DecoderState::SawDigit(digit - b'0'),
                    StepOutcome::Pending,
                ),
                _ => (DecoderState::Ground, StepOutcome::Invalid(rune)),
            },
            DecoderState::SawDigit(code) => match (byte, code) {
                (Some(ANSI_FUNCTION_KEY_TERMINATOR), HOME_CODE_1 | HOME_CODE_2) => {
                    emit(Key::Home)
                }
                (Some(ANSI_FUNCTION_KEY_TERMINATOR), DELETE_CODE) => emit(Key::Delete),
                (Some(ANSI_FUNCTION_KEY_TERMINATOR), END_CODE_1 | END_CODE_2) => {
                    emit(Key::End)
                }
                (Some(ANSI_FUNCTION_KEY_TERMINATOR), PAGE_UP_CODE) => emit(Key::PageUp),
                (Some(ANSI_FUNCTION_KEY_TERMINATOR), PAGE_DOWN_CODE) => {
                    emit(Key::PageDown)
                }
                // `CSI 2~` (Insert) is a valid sequence, but it is not a key here.
                _ => (DecoderState::Ground, StepOutcome::Invalid(rune)),
            },
        }
    }
}

fn emit(key: Key) -> (DecoderState, StepOutcome) {
    (DecoderState::Ground, StepOutcome::Emit(key))
}

/// Blocking decoder over a byte stream.
#[derive(Debug)]
pub struct Decoder<R> {
    runes: RuneReader<R>,
    state: DecoderState,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            runes: RuneReader::new(reader),
            state: DecoderState::Ground,
        }
    }

    #[must_use]
    pub fn state(&self) -> DecoderState { self.state }
}

impl<R: BufRead> KeyDecoder for Decoder<R> {
    fn decode(&mut self) -> Result<Key, DecodeError> {
        loop {
            let rune = match self.runes.read_rune() {
                Ok(Some(rune)) => rune,
                Ok(None) => {
                    self.state = DecoderState::Ground;
                    return Err(DecodeError::StreamEnded);
                }
                Err(err) => {
                    self.state = DecoderState::Ground;
                    return Err(err);
                }
            };

            let (next, outcome) = self.state.step(rune);
            self.state = next;

            match outcome {
                StepOutcome::Emit(key) => return Ok(key),
                StepOutcome::Pending => {}
                StepOutcome::Invalid(found) => {
                    return Err(DecodeError::InvalidEscape { found });
                }
            }
        }
    }
}
