//! Label derivation.
//!
//! Labels name the support files generated for a target definition. The
//! root is always `Pods`; an exclusive target hangs directly off the root
//! label and everything else extends its parent's label.

use super::Target;
use crate::constants::{LABEL_SEPARATOR, ROOT_LABEL, ROOT_TARGET_NAME};

impl Target<'_> {
    /// Display label of this target, e.g. `Pods-App-AppTests`.
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.name();
        if name == ROOT_TARGET_NAME {
            return ROOT_LABEL.to_string();
        }

        match self.parent() {
            Some(parent) if !self.is_exclusive() => {
                format!("{}{LABEL_SEPARATOR}{name}", parent.label())
            }
            _ => format!("{ROOT_LABEL}{LABEL_SEPARATOR}{name}"),
        }
    }
}
