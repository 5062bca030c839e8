#![allow(dead_code)]

pub mod llm;
pub mod temp_db;
