//! # ISA Unit Tests
//!
//! This module contains unit tests for the RV32I helpers: field extraction,
//! immediate reconstruction and disassembly.
