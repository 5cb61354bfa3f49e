//! Simulated status line and host key-command surface

use std::cell::RefCell;
use std::rc::Rc;

use civ_control::{HostPort, StatusSink};

/// A recorded host key command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Focus moved to the other logical radio
    ChangeActiveRadio,
    /// Primary radio switched to run mode
    SetPrimaryRun,
    /// A function key was pressed
    FunctionKey(u8),
}

/// Status line capturing every message shown to the operator
#[derive(Debug, Clone, Default)]
pub struct SimStatus {
    messages: Rc<RefCell<Vec<String>>>,
}

impl SimStatus {
    /// Create an empty status line
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// The most recent message, if any
    pub fn last_message(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    /// Number of messages shown so far
    pub fn message_count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl StatusSink for SimStatus {
    fn status(&mut self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}

/// Host surface recording the key commands issued to it
#[derive(Debug, Clone, Default)]
pub struct SimHost {
    actions: Rc<RefCell<Vec<HostAction>>>,
}

impl SimHost {
    /// Create a host with no recorded actions
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions issued so far, oldest first
    pub fn actions(&self) -> Vec<HostAction> {
        self.actions.borrow().clone()
    }
}

impl HostPort for SimHost {
    fn change_active_radio(&mut self) {
        self.actions.borrow_mut().push(HostAction::ChangeActiveRadio);
    }

    fn set_primary_run(&mut self) {
        self.actions.borrow_mut().push(HostAction::SetPrimaryRun);
    }

    fn send_function_key(&mut self, key: u8) {
        self.actions.borrow_mut().push(HostAction::FunctionKey(key));
    }
}
