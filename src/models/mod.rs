mod question;
mod state;

pub use question::QuestionRecord;
pub use state::{ControllerState, Summary};
