//! OOXML (Office Open XML) generation.
//!
//! This module serializes the document model into WordprocessingML and
//! packages the result as a `.docx` container.

pub mod docx;
