mod keymap;

pub use keymap::KeyBindings;
