// GUI components module
pub mod icons;
pub mod toolbar;
