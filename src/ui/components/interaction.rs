// File: src/ui/components/interaction.rs

/// Macchina a stati visiva di un controllo interattivo (idle / hovered /
/// pressed). È puro stato di rendering: non tocca mai il modello di
/// selezione, decide solo quando un gesto del puntatore vale come
/// attivazione.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractionState {
    hovered: bool,
    pressed: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        InteractionState::default()
    }

    /// Il puntatore è entrato sul controllo
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Il puntatore ha lasciato il controllo. Azzera anche lo stato
    /// premuto: trascinare fuori il puntatore mentre il tasto è giù non
    /// deve lasciare il controllo "incollato" in pressed.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }

    /// Tasto del puntatore premuto sul controllo
    pub fn pointer_down(&mut self) {
        self.hovered = true;
        self.pressed = true;
    }

    /// Tasto del puntatore rilasciato. `inside` indica se il puntatore è
    /// ancora sopra il controllo: il rilascio vale come attivazione solo
    /// se il gesto è iniziato e finito sul controllo.
    pub fn pointer_up(&mut self, inside: bool) -> bool {
        let was_pressed = self.pressed;
        self.pressed = false;
        self.hovered = inside;
        was_pressed && inside
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = InteractionState::new();
        assert!(!state.is_hovered());
        assert!(!state.is_pressed());
    }

    #[test]
    fn enter_and_leave_drive_hover() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        assert!(state.is_hovered());
        state.pointer_leave();
        assert!(!state.is_hovered());
    }

    #[test]
    fn release_inside_activates_once() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        state.pointer_down();
        assert!(state.is_pressed());
        assert!(state.pointer_up(true));
        // Un secondo rilascio senza nuova pressione non attiva
        assert!(!state.pointer_up(true));
    }

    #[test]
    fn release_outside_does_not_activate() {
        let mut state = InteractionState::new();
        state.pointer_down();
        assert!(!state.pointer_up(false));
        assert!(!state.is_hovered());
        assert!(!state.is_pressed());
    }

    // Caso limite: uscire dal controllo con il tasto ancora premuto deve
    // azzerare lo stato premuto
    #[test]
    fn leave_while_pressed_clears_pressed() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        state.pointer_down();
        state.pointer_leave();
        assert!(!state.is_pressed());
        assert!(!state.is_hovered());
        // Il rilascio successivo non conta come attivazione
        assert!(!state.pointer_up(false));
    }

    #[test]
    fn release_keeps_hover_when_still_inside() {
        let mut state = InteractionState::new();
        state.pointer_down();
        state.pointer_up(true);
        assert!(state.is_hovered());
        assert!(!state.is_pressed());
    }
}
