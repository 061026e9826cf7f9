mod check;
mod history;
mod parsed;
mod result;

pub use check::*;
pub use history::*;
pub use parsed::*;
pub use result::*;
