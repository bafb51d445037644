//! Scripted input and captured output, for driving matches without a terminal.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use super::{InputReader, OutputWriter};

/// Replays canned responses, then reports end of input.
pub struct ScriptedInput {
    responses: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl InputReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String, io::Error> {
        self.responses
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Collects everything written. Clones share the buffer.
#[derive(Clone, Default)]
pub struct CaptureOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written so far, as one string.
    pub fn text(&self) -> String {
        self.lines.borrow().concat()
    }
}

impl OutputWriter for CaptureOutput {
    fn write(&mut self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }

    fn writeln(&mut self, message: &str) {
        self.lines.borrow_mut().push(format!("{}\n", message));
    }
}
