pub mod input;
pub mod output;
pub mod record;
pub mod scoring;
