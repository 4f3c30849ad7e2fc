//! Core library for utgen
//!
//! This crate implements the **Functional Core** of the utgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`utgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`utgen`**: Filesystem access and pipeline orchestration (the Imperative Shell)
//!
//! Everything here takes strings in and gives strings (or typed values) back,
//! so the whole generation pipeline can be tested with inline fixtures.
//!
//! # Module Organization
//!
//! - [`layout`]: Package, module root and test path derivation from a source path
//! - [`gradle`]: Build descriptor selection and test dependency detection
//! - [`signature`]: Annotated function signature extraction
//! - [`render`]: Stub and test file rendering
//!
//! # Example Usage
//!
//! ```rust
//! use utgen_core::{layout, render, signature};
//!
//! let path = "/app/src/main/kotlin/com/x/Calc.kt";
//! let source = "@Test fun addNumbers(a: Int, b: Int): Int = a + b";
//!
//! let signatures = signature::extract_signatures(source, "Test").unwrap();
//! let file = render::render_test_file(
//!     &layout::package_name(path).unwrap(),
//!     &layout::test_file_name(path).unwrap(),
//!     &layout::test_class_name(path).unwrap(),
//!     &render::render_stubs(&signatures),
//! );
//!
//! assert!(file.starts_with("package com.x"));
//! assert!(file.contains("fun addNumbersTest()"));
//! ```

mod error;

pub mod gradle;
pub mod layout;
pub mod render;
pub mod signature;

pub use error::Error;
