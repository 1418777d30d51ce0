//! Small form and display primitives shared by the console views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Textarea};

mod chip;
pub use chip::{Chip, ChipTone};
