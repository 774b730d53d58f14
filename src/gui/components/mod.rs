// src/gui/components/mod.rs
pub mod action_buttons;
pub mod footer;
pub mod header;
pub mod school_card;
pub mod school_picker;
pub mod section_frame;
pub mod tabs;
pub mod timeline;
