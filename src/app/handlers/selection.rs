//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Selektion auf eine Komponente oder hebt sie auf.
pub fn select(state: &mut AppState, id: Option<u64>) {
    use_cases::selection::select(state, id);
}
