//! Console environment: the operator types one key per event.

use crate::agent::Environment;
use crate::core::{Command, Event};
use std::cell::{Ref, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io::{self, BufRead, Write};
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::{info, warn};

/// Writer handle that several parts of one agent can write through.
///
/// Clones share the underlying writer, so lines written by any clone come
/// out in the order they were written.
pub struct SharedOutput<W> {
    inner: Rc<RefCell<W>>,
}

impl<W> SharedOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(writer)),
        }
    }

    /// Borrow the underlying writer.
    pub fn get(&self) -> Ref<'_, W> {
        self.inner.borrow()
    }
}

impl<W> Clone for SharedOutput<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

/// Environment reading whitespace-separated event keys from `input`.
///
/// Unknown keys produce no event for that cycle. End of input produces the
/// configured end event, so a driving loop waiting for it stops cleanly.
pub struct ConsoleEnvironment<E, C, R, W> {
    input: R,
    output: W,
    keys: HashMap<String, E>,
    prompt: String,
    end_of_input: E,
    pending: VecDeque<String>,
    current: Option<E>,
    _command: PhantomData<C>,
}

impl<E, C, R, W> ConsoleEnvironment<E, C, R, W>
where
    E: Event,
    C: Command,
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, keys: HashMap<String, E>, end_of_input: E) -> Self {
        Self {
            input,
            output,
            keys,
            prompt: "Event? ".to_string(),
            end_of_input,
            pending: VecDeque::new(),
            current: None,
            _command: PhantomData,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Next token, prompting and reading more lines as needed. `None` at end
    /// of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            write!(self.output, "\n{}", self.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<E, C, R, W> Environment for ConsoleEnvironment<E, C, R, W>
where
    E: Event,
    C: Command,
    R: BufRead,
    W: Write,
{
    type Event = E;
    type Command = C;
    type Error = io::Error;

    fn evolve(&mut self) -> io::Result<()> {
        self.current = match self.next_token()? {
            Some(token) => {
                let event = self.keys.get(&token).cloned();
                if event.is_none() {
                    warn!(%token, "unknown event key");
                }
                event
            }
            None => {
                info!("end of input");
                Some(self.end_of_input.clone())
            }
        };
        Ok(())
    }

    fn current_event(&self) -> Option<&E> {
        self.current.as_ref()
    }

    fn observe(&mut self) -> io::Result<Option<E>> {
        if let Some(event) = &self.current {
            event.render(&mut self.output)?;
        }
        Ok(self.current.clone())
    }

    fn execute(&mut self, command: &C) -> io::Result<()> {
        command.render(&mut self.output)
    }
}
