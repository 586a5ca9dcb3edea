//! # Mailgrid HTML Compiler
//!
//! Turns a template tree into one self-contained HTML document: an inline
//! stylesheet, an `.email-container` holding one `.section` per section,
//! nested `.row` / `.column` blocks, and one tag per component.

mod compiler;


pub use compiler::{
    compile_component, compile_to_html, component_style, escape_html, flex_factor, CompileOptions,
};
