//! Keyboard bindings, ship actions and session lifetime.
pub mod input;
pub mod inputmap;
pub mod session;
