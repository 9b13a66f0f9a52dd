use super::input::{InputError, ReadValue};
use crate::{CircularList, ContainerError, Element, ElementKind, Queue, Stack};
use core::fmt::Display;
use std::path::Path;

/// Error cases of a single menu command; reported to the user, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Container => The container operation failed.
    Container(ContainerError),
    /// Input => The argument of the command could not be read.
    Input(InputError),
    /// PersistenceUnsupported => Stacks of this element kind cannot be saved or loaded.
    PersistenceUnsupported(ElementKind),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Container(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "{e}"),
            Self::PersistenceUnsupported(kind) => {
                write!(f, "a stack of {kind} elements cannot be saved or loaded")
            }
        }
    }
}

impl core::error::Error for CommandError {}

impl From<ContainerError> for CommandError {
    fn from(error: ContainerError) -> Self {
        Self::Container(error)
    }
}

impl From<InputError> for CommandError {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}

/// An element type a console session can be opened with.
pub trait SessionElement: Element + ReadValue {
    /// Saves the `stack` to the file at `path`.
    fn save_stack(stack: &Stack<Self>, path: &Path) -> Result<(), CommandError>;

    /// Replaces the content of the `stack` with that of the file at `path`.
    fn load_stack(stack: &mut Stack<Self>, path: &Path) -> Result<(), CommandError>;
}

macro_rules! fixed_width_session_element {
    ($($t:ty),*) => {
        $(
            impl SessionElement for $t {
                fn save_stack(stack: &Stack<Self>, path: &Path) -> Result<(), CommandError> {
                    Ok(stack.save_to_file(path)?)
                }

                fn load_stack(stack: &mut Stack<Self>, path: &Path) -> Result<(), CommandError> {
                    Ok(stack.load_from_file(path)?)
                }
            }
        )*
    };
}

fixed_width_session_element!(i32, f32, char);

impl SessionElement for String {
    fn save_stack(_: &Stack<Self>, _: &Path) -> Result<(), CommandError> {
        Err(CommandError::PersistenceUnsupported(Self::KIND))
    }

    fn load_stack(_: &mut Stack<Self>, _: &Path) -> Result<(), CommandError> {
        Err(CommandError::PersistenceUnsupported(Self::KIND))
    }
}

/// Containers of one element type living as long as the user stays with that type.
pub struct Session<T: SessionElement> {
    pub(super) stack: Stack<T>,
    pub(super) queue: Queue<T>,
    pub(super) list: CircularList<T>,
}

impl<T: SessionElement> Default for Session<T> {
    fn default() -> Self {
        Self {
            stack: Stack::new(),
            queue: Queue::new(),
            list: CircularList::new(),
        }
    }
}
