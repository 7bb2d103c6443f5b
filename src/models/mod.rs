pub mod record;
pub mod report;
pub mod request;

pub use record::*;
pub use report::*;
pub use request::*;
