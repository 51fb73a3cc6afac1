mod acceptor;
pub mod error;
pub mod problem;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_utils;
