//! # Commands / 命令
//!
//! - `run` - check a candidate program against stored outputs
//! - `generate` - produce stored outputs with a reference program
//!
//! - `run` - 将候选程序与已存储的输出进行比较
//! - `generate` - 使用参考程序生成输出

pub mod generate;
pub mod run;
