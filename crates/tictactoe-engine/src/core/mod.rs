pub use self::{board::*, cell::*, outcome::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod outcome;
