//! Ministry domain module: consecrated ministers and their meetings.

pub mod meeting;
pub mod minister;
pub mod position;

pub use meeting::{Meeting, MeetingRequest};
pub use minister::{Minister, MinisterInfo, MinisterRequest, search};
pub use position::{MinisterialPosition, translate_position};
