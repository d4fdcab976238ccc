//! Records exchanged with the API, one submodule per resource.

pub mod bridge;
pub mod common;
pub mod customers;
pub mod funding_events;
pub mod payments;
pub mod paykeys;

pub use bridge::*;
pub use common::*;
pub use customers::*;
pub use funding_events::*;
pub use payments::*;
pub use paykeys::*;
