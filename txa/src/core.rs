// src/core.rs
pub mod analyser;
pub mod character;
pub mod classify;
pub mod sentence;
pub mod word;
