// Adapters layer: concrete implementations for external systems (email provider, terminal).

pub mod console;
pub mod emailjs;
