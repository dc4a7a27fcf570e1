mod base;
mod err;
mod mat;

pub use base::*;
pub use err::{MatError, MatResult};
pub use mat::*;
