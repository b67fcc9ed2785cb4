#![allow(dead_code)]

pub mod callbacks;
pub mod scheduler;
