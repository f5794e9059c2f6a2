// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The kernel loop.
//!
//! It is the only place that mutates editor state. It waits on the event channel,
//! hands keys to the open prompt or to the policy chain, applies resizes, turns
//! recoverable errors into status messages, and redraws after every event.

use super::{EditorState, KernelEvent, KernelEventReceiver, KeyOutcome, PolicyChain,
            PromptOutcome, Redraw, DEBUG_RAWED_KERNEL};
use crate::{EditorError, EditorResult, Key, Renderer};
use std::ops::ControlFlow;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelExit {
    Quit,
    InputClosed,
}

#[derive(Debug)]
pub struct Kernel {
    state: EditorState,
    policies: PolicyChain,
    renderer: Renderer,
}

impl Kernel {
    #[must_use]
    pub fn new(state: EditorState, policies: PolicyChain, renderer: Renderer) -> Self {
        Self {
            state,
            policies,
            renderer,
        }
    }

    #[must_use]
    pub fn state(&self) -> &EditorState { &self.state }

    #[must_use]
    pub fn into_state(self) -> EditorState { self.state }

    /// Draw, then process events until a policy quits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns fatal errors (see [`EditorError::is_fatal`]) and failures to write to
    /// the terminal.
    pub async fn run(&mut self, receiver: &mut KernelEventReceiver) -> EditorResult<KernelExit> {
        tracing::info!(
            message = "kernel loop started",
            policies = ?self.policies.names()
        );
        self.render()?;

        while let Some(event) = receiver.recv().await {
            DEBUG_RAWED_KERNEL.then(|| {
                tracing::debug!(message = "kernel event", event = ?event);
            });

            if let ControlFlow::Break(exit) = self.handle_event(event)? {
                tracing::info!(message = "kernel loop stopped", exit = ?exit);
                return Ok(exit);
            }
            self.render()?;
        }

        // Every sender is gone, same as the input closing.
        Ok(KernelExit::InputClosed)
    }

    /// Apply one event to the state. Does not draw.
    ///
    /// # Errors
    ///
    /// Returns fatal errors only, everything else ends up in the status message.
    pub fn handle_event(&mut self, event: KernelEvent) -> EditorResult<ControlFlow<KernelExit>> {
        let result = match event {
            KernelEvent::Key(key) => self.handle_key(key),
            KernelEvent::Resize(size) => {
                self.state.viewport.resize(size);
                Ok(KeyOutcome::Handled)
            }
            KernelEvent::Error(err) => Err(err),
            KernelEvent::InputClosed => return Ok(ControlFlow::Break(KernelExit::InputClosed)),
        };

        match result {
            Ok(KeyOutcome::Quit) => Ok(ControlFlow::Break(KernelExit::Quit)),
            Ok(_) => Ok(ControlFlow::Continue(())),
            Err(err) => self.report(err).map(ControlFlow::Continue),
        }
    }

    fn handle_key(&mut self, key: Key) -> EditorResult<KeyOutcome> {
        let Some(prompt) = self.state.prompt_mut() else {
            return self.policies.dispatch_key(&mut self.state, key);
        };

        match prompt.handle_key(key) {
            PromptOutcome::Editing => Ok(KeyOutcome::Handled),
            PromptOutcome::Cancelled => {
                self.state.close_prompt();
                self.state.clear_status();
                Ok(KeyOutcome::Handled)
            }
            PromptOutcome::Submitted(input) => {
                let Some(prompt) = self.state.close_prompt() else {
                    return Ok(KeyOutcome::Handled);
                };
                self.state.clear_status();
                self.policies
                    .dispatch_prompt(&mut self.state, prompt.kind(), &input)
            }
        }
    }

    /// Recoverable errors become the status message, fatal ones end the loop.
    fn report(&mut self, err: EditorError) -> EditorResult<()> {
        if err.is_fatal() {
            tracing::error!(message = "fatal error", error = %err);
            return Err(err);
        }
        tracing::warn!(message = "error shown to user", error = %err);
        self.state.set_status(err.to_string());
        self.state.viewport.clamp(&self.state.doc);
        Ok(())
    }

    /// Full frame when the view moved, otherwise only the rows an edit touched.
    fn render(&mut self) -> EditorResult<()> {
        let redraw = self.state.take_redraw();
        let message = self.state.message_bar_text();
        let frame = self.state.frame(&message);
        match redraw {
            Redraw::Frame => self.renderer.render_frame(&frame),
            Redraw::Rows(rows) => self.renderer.render_rows(&frame, rows),
        }
    }
}
