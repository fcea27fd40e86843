//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the tester,
//! including process spawning with captured streams and file system helpers.
//!
//! 此模块为测试工具提供基础设施服务，
//! 包括捕获输出流的进程派生和文件系统辅助函数。

pub mod command;
pub mod fs;
