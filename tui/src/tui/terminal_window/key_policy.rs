// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EditorState, PromptKind};
use crate::{EditorResult, Key};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// Let the next policy in the chain try.
    NotHandled,
    /// Stop the kernel loop. This is not an error.
    Quit,
}

/// Decides what a key does. The kernel holds an ordered chain of these and offers
/// each key to them in turn until one of them reports something other than
/// [`KeyOutcome::NotHandled`].
pub trait KeyPolicy: Debug + Send {
    fn name(&self) -> &'static str;

    fn handle_key(&mut self, state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome>;

    /// Called with the text typed into a prompt when the user submits it.
    fn on_prompt_submit(
        &mut self,
        _state: &mut EditorState,
        _kind: PromptKind,
        _input: &str,
    ) -> EditorResult<KeyOutcome> {
        Ok(KeyOutcome::NotHandled)
    }
}

pub type BoxedKeyPolicy = Box<dyn KeyPolicy>;

#[derive(Debug, Default)]
pub struct PolicyChain {
    policies: Vec<BoxedKeyPolicy>,
}

impl PolicyChain {
    #[must_use]
    pub fn new(policies: Vec<BoxedKeyPolicy>) -> Self { Self { policies } }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> { self.policies.iter().map(|it| it.name()).collect() }

    /// The first error stops the chain.
    pub fn dispatch_key(&mut self, state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome> {
        for policy in &mut self.policies {
            match policy.handle_key(state, key)? {
                KeyOutcome::NotHandled => {}
                outcome => return Ok(outcome),
            }
        }
        Ok(KeyOutcome::NotHandled)
    }

    pub fn dispatch_prompt(
        &mut self,
        state: &mut EditorState,
        kind: PromptKind,
        input: &str,
    ) -> EditorResult<KeyOutcome> {
        for policy in &mut self.policies {
            match policy.on_prompt_submit(state, kind, input)? {
                KeyOutcome::NotHandled => {}
                outcome => return Ok(outcome),
            }
        }
        Ok(KeyOutcome::NotHandled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, EditorError, Viewport, height, width};
    use pretty_assertions::assert_eq;

    /// Handles one key, counts how often it was asked.
    #[derive(Debug)]
    struct Only {
        key: Key,
        outcome: KeyOutcome,
        asked: usize,
    }

    impl KeyPolicy for Only {
        fn name(&self) -> &'static str { "only" }

        fn handle_key(&mut self, _state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome> {
            self.asked += 1;
            if key == self.key {
                Ok(self.outcome)
            } else {
                Ok(KeyOutcome::NotHandled)
            }
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl KeyPolicy for Failing {
        fn name(&self) -> &'static str { "failing" }

        fn handle_key(&mut self, _state: &mut EditorState, _key: Key) -> EditorResult<KeyOutcome> {
            Err(EditorError::unsupported("everything"))
        }
    }

    fn state() -> EditorState {
        EditorState::new(
            Document::default(),
            Viewport::new(width(80_usize) + height(24_usize)),
        )
    }

    fn only(ch: char, outcome: KeyOutcome) -> BoxedKeyPolicy {
        Box::new(Only {
            key: Key::Char(ch),
            outcome,
            asked: 0,
        })
    }

    #[test]
    fn test_first_policy_that_handles_wins() {
        let mut chain = PolicyChain::new(vec![
            only('a', KeyOutcome::Handled),
            only('q', KeyOutcome::Quit),
            Box::new(Failing),
        ]);
        let mut state = state();

        assert_eq!(
            chain.dispatch_key(&mut state, Key::Char('a')).unwrap(),
            KeyOutcome::Handled
        );
        assert_eq!(
            chain.dispatch_key(&mut state, Key::Char('q')).unwrap(),
            KeyOutcome::Quit
        );
        assert!(chain.dispatch_key(&mut state, Key::Char('z')).is_err());
        assert_eq!(chain.names(), vec!["only", "only", "failing"]);
    }

    #[test]
    fn test_prompt_submit_defaults_to_not_handled() {
        let mut chain = PolicyChain::new(vec![only('a', KeyOutcome::Handled)]);
        assert_eq!(
            chain
                .dispatch_prompt(&mut state(), PromptKind::Find, "x")
                .unwrap(),
            KeyOutcome::NotHandled
        );
    }
}
