mod fields;
mod form;
mod transport;
mod types;

pub use fields::*;
pub use form::*;
pub use transport::*;
pub use types::*;
