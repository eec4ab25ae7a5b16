// src/lib.rs

pub mod aggregate;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod pipeline;
pub mod resolve;
pub mod vocabulary;
