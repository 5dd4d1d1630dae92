pub mod maintenance;
pub mod misc;
pub mod notes;
pub mod preview;
pub mod search;
pub mod theme;
