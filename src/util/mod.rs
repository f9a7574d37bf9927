#[cfg(test)]
pub mod alloc;
pub mod buf;
pub mod error;
