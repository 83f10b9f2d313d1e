//! Implementation details of the pipe distance queries.

pub use self::distance_pipe_pipe::distance_pipe_pipe;

mod distance_pipe_pipe;
