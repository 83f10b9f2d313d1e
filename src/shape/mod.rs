//! Manholes, pipes, and the snapshot they form together.

pub use self::error::{ManholeError, PipeError, SystemError};
pub use self::manhole::Manhole;
pub use self::pipe::{Pipe, PipeId};
pub use self::placed_pipe::PlacedPipe;
pub use self::system::System;

mod error;
mod manhole;
mod pipe;
mod placed_pipe;
mod system;
