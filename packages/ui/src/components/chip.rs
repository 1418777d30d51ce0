use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipTone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl ChipTone {
    pub fn as_str(self) -> &'static str {
        match self {
            ChipTone::Neutral => "neutral",
            ChipTone::Info => "info",
            ChipTone::Success => "success",
            ChipTone::Warning => "warning",
            ChipTone::Error => "error",
        }
    }
}

/// A small colored status label.
#[component]
pub fn Chip(label: String, #[props(default)] tone: ChipTone) -> Element {
    rsx! {
        span { class: "chip chip-{tone.as_str()}", "{label}" }
    }
}
