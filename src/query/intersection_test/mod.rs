//! Implementation details of the pipe spacing tests.

pub use self::intersection_test_pipe_pipe::intersection_test_pipe_pipe;

mod intersection_test_pipe_pipe;
