//! Reusable UI components

mod button;

pub use button::{button_width, render_button, render_key_button};
