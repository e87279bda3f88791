// File: src/ui/components/toggle.rs

//! Vista checkbox con feedback visivo (hover, pressione, flash di click).
//!
//! La vista non modifica mai da sola il proprio stato `checked`: su ogni
//! attivazione invoca la callback del proprietario, che aggiorna il modello
//! di selezione e ripropaga il nuovo valore con `set_checked`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cursive::direction::Direction;
use cursive::event::{Event, EventResult, Key, MouseButton, MouseEvent};
use cursive::theme::{ColorStyle, Effect};
use cursive::view::CannotFocus;
use cursive::{Cursive, Printer, Vec2, View};

use crate::ui::components::interaction::InteractionState;

/// Larghezza fissa del glifo "[x]" / "[ ]"
const TOGGLE_WIDTH: usize = 3;

/// Stile del flash transitorio mostrato subito dopo un click
#[derive(Clone)]
pub struct FlashStyle {
    pub enabled: bool,
    pub duration: Duration,
}

impl FlashStyle {
    /// Nessun flash (prima variante del componente)
    pub fn disabled() -> Self {
        FlashStyle {
            enabled: false,
            duration: Duration::ZERO,
        }
    }

    /// Flash abilitato con la durata data (seconda variante)
    pub fn with_duration(duration: Duration) -> Self {
        FlashStyle {
            enabled: true,
            duration,
        }
    }
}

/// Checkbox a tre stati visivi (idle, hovered, pressed) più la dimensione
/// ortogonale `checked` e, se abilitato, lo stato transitorio `clicked`.
pub struct ToggleView {
    /// Nome con cui la vista è registrata, usato dal timer del flash
    name: String,
    checked: bool,
    state: InteractionState,
    flash: FlashStyle,
    /// Stato transitorio di click, azzerato dal timer
    clicked: bool,
    /// Contatore di generazione: un timer vecchio non deve azzerare il
    /// flash di un click più recente
    flash_generation: u64,
    // Arc, non Rc: il trait View di cursive richiede Send + Sync
    on_activate: Arc<dyn Fn(&mut Cursive) + Send + Sync>,
}

impl ToggleView {
    pub fn new<F>(name: impl Into<String>, on_activate: F) -> Self
    where
        F: Fn(&mut Cursive) + Send + Sync + 'static,
    {
        ToggleView {
            name: name.into(),
            checked: false,
            state: InteractionState::new(),
            flash: FlashStyle::disabled(),
            clicked: false,
            flash_generation: 0,
            on_activate: Arc::new(on_activate),
        }
    }

    /// Imposta lo stato iniziale di spunta (stile builder)
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Configura il flash di click (stile builder)
    pub fn flash(mut self, flash: FlashStyle) -> Self {
        self.flash = flash;
        self
    }

    /// Aggiorna lo stato di spunta dal proprietario
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    #[cfg(test)]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Azzera il flash, ma solo se la generazione corrisponde ancora al
    /// click che ha armato il timer
    pub fn clear_clicked(&mut self, generation: u64) {
        if self.flash_generation == generation {
            self.clicked = false;
        }
    }

    fn activate(&mut self) -> EventResult {
        if self.flash.enabled {
            self.clicked = true;
            self.flash_generation = self.flash_generation.wrapping_add(1);
        }

        let on_activate = Arc::clone(&self.on_activate);
        let flash = self.flash.clone();
        let name = self.name.clone();
        let generation = self.flash_generation;

        EventResult::with_cb(move |s| {
            if flash.enabled {
                schedule_flash_clear(s, name.clone(), generation, flash.duration);
            }
            on_activate(s);
        })
    }
}

impl View for ToggleView {
    fn draw(&self, printer: &Printer) {
        let style = if self.state.is_pressed() {
            ColorStyle::highlight()
        } else if self.state.is_hovered() || printer.focused {
            ColorStyle::highlight_inactive()
        } else if self.checked {
            ColorStyle::title_primary()
        } else {
            ColorStyle::primary()
        };

        let glyph = if self.checked { "[x]" } else { "[ ]" };

        if self.clicked {
            // Breve evidenziazione a video inverso dopo il click
            printer.with_effect(Effect::Reverse, |p| {
                p.with_color(style, |p| p.print((0, 0), glyph));
            });
        } else {
            printer.with_color(style, |p| p.print((0, 0), glyph));
        }
    }

    fn required_size(&mut self, _constraint: Vec2) -> Vec2 {
        Vec2::new(TOGGLE_WIDTH, 1)
    }

    fn on_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(Key::Enter) | Event::Char(' ') => self.activate(),
            Event::Mouse {
                offset,
                position,
                event,
            } => {
                let inside = position.fits_in_rect(offset, Vec2::new(TOGGLE_WIDTH, 1));
                match event {
                    MouseEvent::Press(MouseButton::Left) if inside => {
                        self.state.pointer_down();
                        EventResult::Consumed(None)
                    }
                    MouseEvent::Release(MouseButton::Left) => {
                        if self.state.pointer_up(inside) {
                            self.activate()
                        } else {
                            EventResult::Consumed(None)
                        }
                    }
                    MouseEvent::Hold(MouseButton::Left) if !inside => {
                        // Puntatore trascinato fuori con il tasto premuto
                        self.state.pointer_leave();
                        EventResult::Consumed(None)
                    }
                    _ => {
                        if inside {
                            self.state.pointer_enter();
                        } else {
                            self.state.pointer_leave();
                        }
                        EventResult::Ignored
                    }
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn take_focus(&mut self, _source: Direction) -> Result<EventResult, CannotFocus> {
        Ok(EventResult::Consumed(None))
    }
}

/// Arma il timer che azzera il flash dopo la durata configurata. Il timer è
/// fire-and-forget: se nel frattempo la vista è stata smontata,
/// `call_on_name` non trova nulla e il cambiamento pendente viene scartato.
fn schedule_flash_clear(siv: &mut Cursive, name: String, generation: u64, duration: Duration) {
    let cb_sink = siv.cb_sink().clone();
    thread::spawn(move || {
        thread::sleep(duration);
        let _ = cb_sink.send(Box::new(move |s: &mut Cursive| {
            s.call_on_name(&name, |view: &mut ToggleView| {
                view.clear_clicked(generation);
            });
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> ToggleView {
        ToggleView::new("toggle_test", |_s| {})
    }

    // Il trait View di cursive richiede Send + Sync
    #[test]
    fn view_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ToggleView>();
    }

    #[test]
    fn owner_drives_checked_state() {
        let mut view = toggle();
        assert!(!view.is_checked());
        view.set_checked(true);
        assert!(view.is_checked());
        // L'attivazione da tastiera non cambia lo stato di spunta da sola
        let result = view.on_event(Event::Key(Key::Enter));
        assert!(matches!(result, EventResult::Consumed(_)));
        assert!(view.is_checked());
    }

    #[test]
    fn mouse_press_then_release_inside_activates() {
        let mut view = toggle().flash(FlashStyle::with_duration(Duration::from_millis(150)));
        let press = view.on_event(Event::Mouse {
            offset: Vec2::zero(),
            position: Vec2::new(1, 0),
            event: MouseEvent::Press(MouseButton::Left),
        });
        assert!(matches!(press, EventResult::Consumed(_)));

        let release = view.on_event(Event::Mouse {
            offset: Vec2::zero(),
            position: Vec2::new(1, 0),
            event: MouseEvent::Release(MouseButton::Left),
        });
        assert!(matches!(release, EventResult::Consumed(Some(_))));
        assert!(view.clicked);
    }

    #[test]
    fn release_outside_does_not_activate() {
        let mut view = toggle().flash(FlashStyle::with_duration(Duration::from_millis(150)));
        view.on_event(Event::Mouse {
            offset: Vec2::zero(),
            position: Vec2::new(1, 0),
            event: MouseEvent::Press(MouseButton::Left),
        });
        let release = view.on_event(Event::Mouse {
            offset: Vec2::zero(),
            position: Vec2::new(20, 0),
            event: MouseEvent::Release(MouseButton::Left),
        });
        assert!(matches!(release, EventResult::Consumed(None)));
        assert!(!view.clicked);
    }

    #[test]
    fn stale_timer_does_not_clear_newer_flash() {
        let mut view = toggle().flash(FlashStyle::with_duration(Duration::from_millis(150)));
        view.on_event(Event::Key(Key::Enter));
        let first_generation = view.flash_generation;
        view.on_event(Event::Key(Key::Enter));
        // Il timer armato dal primo click arriva in ritardo: non deve
        // spegnere il flash del secondo
        view.clear_clicked(first_generation);
        assert!(view.clicked);
        view.clear_clicked(view.flash_generation);
        assert!(!view.clicked);
    }
}
