mod layout;
pub use layout::*;

mod feedback;
pub use feedback::*;
