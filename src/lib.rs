// src/lib.rs
// Library interface for bounty-scout
pub mod cli;
pub mod manual;
pub mod normalize;
pub mod pipeline;
pub mod platforms;
pub mod report;
