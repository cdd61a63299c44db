mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod fields;
pub use fields::{FieldMessage, SearchBox, TextField};
