//! Request types and client methods, one module per API resource.

mod bibles;
mod books;
mod chapters;
mod passages;
mod search;
mod sections;
mod verses;

pub use bibles::*;
pub use books::*;
pub use chapters::*;
pub use passages::*;
pub use search::*;
pub use sections::*;
pub use verses::*;
