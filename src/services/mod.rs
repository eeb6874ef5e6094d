pub mod backend;
pub mod editor;
pub mod overlap;
pub mod validation;
