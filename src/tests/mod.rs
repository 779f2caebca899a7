//! Cross-module tests compiled with the binary.
