mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod display_toggles;
pub use display_toggles::DisplayToggles;
