pub mod preflight;
pub mod scaffold;
