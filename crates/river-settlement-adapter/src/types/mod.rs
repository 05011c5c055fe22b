/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed structs for API communication
[POS]:    Data layer - module wiring
[UPDATE]: When type modules change
*/

pub mod models;
pub mod requests;
pub mod responses;

pub use models::*;
pub use requests::*;
pub use responses::*;
