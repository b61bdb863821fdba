mod problem;
pub use crate::problem::Problem;

mod divisor;
pub use crate::divisor::Divisor;

mod catalog;
pub use crate::catalog::{combinations, Catalog, TOLERANCE};

mod complex;
pub use crate::complex::{Complex, Form, Rendering};

mod config;
pub use crate::config::{Config, DivisorSet, DEFAULT_CAPACITY, DEFAULT_COMBINATION_SIZE};

mod interpreter;
pub use crate::interpreter::{Interpreter, Reply, HELP};
