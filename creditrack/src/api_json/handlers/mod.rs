pub mod report;
pub mod curriculum;
pub mod docs;

pub use report::*;
pub use curriculum::*;
pub use docs::*;
