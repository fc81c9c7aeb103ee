pub mod catalog;
pub mod creations;
pub mod partner;
pub mod prompts;
