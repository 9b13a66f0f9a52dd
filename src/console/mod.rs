//! Interactive text menu driving the containers.
//!
//! The user first picks an element type, then one of the three containers of that
//! type, and then issues numbered commands on it. Every failing command is reported
//! and the menu continues; the console returns when the user exits or the input ends.

mod input;
mod session;

pub use input::{Input, InputError, ReadValue};
pub use session::{CommandError, Session, SessionElement};

use crate::{CircularList, ElementKind, Queue, Stack};
use core::fmt::Display;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Exit,
}

enum Command {
    Code(u32),
    Unknown(String),
}

/// The interactive console reading commands from `R` and writing to `W`.
pub struct Console<R, W> {
    input: Input<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading commands from `reader` and writing to `output`.
    pub fn new(reader: R, output: W) -> Self {
        Self {
            input: Input::new(reader),
            output,
        }
    }

    /// Destructs the console into its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the console until the user exits or the input is exhausted.
    ///
    /// With a `preset` element kind, the type selection menu is skipped and
    /// a single session of the given kind is run.
    pub fn run(&mut self, preset: Option<ElementKind>) -> io::Result<()> {
        match preset {
            Some(kind) => self.session(kind).map(|_| ()),
            None => loop {
                let prompt = "\nSelect element type: 1.int  2.float  3.char  4.string  0.exit\nChoice: ";
                let kind = match self.read_command(prompt)? {
                    None | Some(Command::Code(0)) => return Ok(()),
                    Some(Command::Code(code @ 1..=4)) => ElementKind::ALL[code as usize - 1],
                    Some(command) => {
                        self.unknown(command)?;
                        continue;
                    }
                };
                if self.session(kind)? == Flow::Exit {
                    return Ok(());
                }
            },
        }
    }

    fn session(&mut self, kind: ElementKind) -> io::Result<Flow> {
        match kind {
            ElementKind::Integer => self.run_session::<i32>(),
            ElementKind::Float => self.run_session::<f32>(),
            ElementKind::Character => self.run_session::<char>(),
            ElementKind::Text => self.run_session::<String>(),
        }
    }

    fn run_session<T: SessionElement>(&mut self) -> io::Result<Flow> {
        let mut session = Session::<T>::default();
        loop {
            let prompt = format!(
                "\n[{}] 1.stack  2.queue  3.list  0.back to type selection\nChoice: ",
                T::KIND
            );
            let flow = match self.read_command(&prompt)? {
                None => Flow::Exit,
                Some(Command::Code(0)) => return Ok(Flow::Back),
                Some(Command::Code(1)) => self.stack_menu(&mut session.stack)?,
                Some(Command::Code(2)) => self.queue_menu(&mut session.queue)?,
                Some(Command::Code(3)) => self.list_menu(&mut session.list)?,
                Some(command) => {
                    self.unknown(command)?;
                    Flow::Back
                }
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
    }

    fn stack_menu<T: SessionElement>(&mut self, stack: &mut Stack<T>) -> io::Result<Flow> {
        let prompt = "\nStack: 1.push  2.pop  3.top  4.print  5.save to file  6.load from file  7.sort  0.back\nChoice: ";
        loop {
            let code = match self.read_command(prompt)? {
                None => return Ok(Flow::Exit),
                Some(Command::Code(0)) => return Ok(Flow::Back),
                Some(Command::Code(code)) if code <= 7 => code,
                Some(command) => {
                    self.unknown(command)?;
                    continue;
                }
            };
            let outcome = match code {
                1 => self.read_value("Value: ").map(|x| {
                    stack.push(x);
                    None
                }),
                2 => stack.pop().map(|_| None).map_err(Into::into),
                3 => stack
                    .peek()
                    .map(|top| Some(format!("Top: {top}")))
                    .map_err(Into::into),
                4 => Ok(Some(render("Stack", stack.is_empty(), &*stack))),
                5 => self
                    .read_path()
                    .and_then(|path| T::save_stack(stack, &path))
                    .map(|_| None),
                6 => self
                    .read_path()
                    .and_then(|path| T::load_stack(stack, &path))
                    .map(|_| None),
                _ => {
                    stack.sort();
                    Ok(None)
                }
            };
            self.report(outcome)?;
        }
    }

    fn queue_menu<T: SessionElement>(&mut self, queue: &mut Queue<T>) -> io::Result<Flow> {
        let prompt = "\nQueue: 1.enqueue  2.dequeue  3.front  4.print  5.sort  0.back\nChoice: ";
        loop {
            let code = match self.read_command(prompt)? {
                None => return Ok(Flow::Exit),
                Some(Command::Code(0)) => return Ok(Flow::Back),
                Some(Command::Code(code)) if code <= 5 => code,
                Some(command) => {
                    self.unknown(command)?;
                    continue;
                }
            };
            let outcome = match code {
                1 => self.read_value("Value: ").map(|x| {
                    queue.enqueue(x);
                    None
                }),
                2 => queue.dequeue().map(|_| None).map_err(Into::into),
                3 => queue
                    .peek()
                    .map(|front| Some(format!("Front: {front}")))
                    .map_err(Into::into),
                4 => Ok(Some(render("Queue", queue.is_empty(), &*queue))),
                _ => {
                    queue.sort();
                    Ok(None)
                }
            };
            self.report(outcome)?;
        }
    }

    fn list_menu<T: SessionElement>(&mut self, list: &mut CircularList<T>) -> io::Result<Flow> {
        let prompt =
            "\nList: 1.insert at back  2.find  3.remove all  4.print  5.sort  0.back\nChoice: ";
        loop {
            let code = match self.read_command(prompt)? {
                None => return Ok(Flow::Exit),
                Some(Command::Code(0)) => return Ok(Flow::Back),
                Some(Command::Code(code)) if code <= 5 => code,
                Some(command) => {
                    self.unknown(command)?;
                    continue;
                }
            };
            let outcome = match code {
                1 => self.read_value("Value: ").map(|x| {
                    list.insert_back(x);
                    None
                }),
                2 => self.read_value::<T>("Value to find: ").map(|key| {
                    let found = list.find(&key).and_then(|idx| list.get(&idx).ok());
                    Some(match found {
                        Some(found) => format!("Found: {found}"),
                        None => "Not found".to_string(),
                    })
                }),
                3 => self.read_value::<T>("Value to remove: ").and_then(|key| {
                    let num_removed = list.remove_all(&key)?;
                    Ok(Some(format!("Removed {num_removed} element(s)")))
                }),
                4 => Ok(Some(render("List", list.is_empty(), &*list))),
                _ => {
                    list.sort();
                    Ok(None)
                }
            };
            self.report(outcome)?;
        }
    }

    fn read_command(&mut self, prompt: &str) -> io::Result<Option<Command>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        match self.input.next_token() {
            Ok(None) => Ok(None),
            Ok(Some(token)) => Ok(Some(match token.parse() {
                Ok(code) => Command::Code(code),
                Err(_) => Command::Unknown(token),
            })),
            Err(e) => Err(io::Error::other(e)),
        }
    }

    fn read_value<T: ReadValue>(&mut self, prompt: &str) -> Result<T, CommandError> {
        write!(self.output, "{prompt}").and_then(|_| self.output.flush())?;
        Ok(T::read_value(&mut self.input)?)
    }

    fn read_path(&mut self) -> Result<PathBuf, CommandError> {
        write!(self.output, "File name: ").and_then(|_| self.output.flush())?;
        let token = self.input.next_token()?.ok_or(InputError::EndOfInput)?;
        Ok(PathBuf::from(token))
    }

    fn unknown(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Code(code) => writeln!(self.output, "Unknown command: {code}"),
            Command::Unknown(token) => writeln!(self.output, "Unknown command: {token}"),
        }
    }

    fn report(&mut self, outcome: Result<Option<String>, CommandError>) -> io::Result<()> {
        match outcome {
            Ok(None) => Ok(()),
            Ok(Some(message)) => writeln!(self.output, "{message}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(error: io::Error) -> Self {
        Self::Input(error.into())
    }
}

fn render<C: Display>(name: &str, is_empty: bool, container: &C) -> String {
    match is_empty {
        true => format!("{name} is empty"),
        false => container.to_string(),
    }
}
