// File: src/ui/components/button.rs

//! Bottone di conferma con gli stessi stati visivi del toggle (idle,
//! hovered, pressed) ma senza la dimensione `checked`. L'effetto reale
//! dell'azione resta esterno: la vista si limita a invocare la callback
//! fornita dal chiamante, esattamente una volta per attivazione.

use std::sync::Arc;

use cursive::direction::Direction;
use cursive::event::{Event, EventResult, Key, MouseButton, MouseEvent};
use cursive::theme::ColorStyle;
use cursive::view::CannotFocus;
use cursive::{Cursive, Printer, Vec2, View};

use crate::ui::components::interaction::InteractionState;

pub struct ActionButton {
    label: String,
    state: InteractionState,
    // Arc, non Rc: il trait View di cursive richiede Send + Sync
    on_press: Arc<dyn Fn(&mut Cursive) + Send + Sync>,
}

impl ActionButton {
    pub fn new<F>(label: impl Into<String>, on_press: F) -> Self
    where
        F: Fn(&mut Cursive) + Send + Sync + 'static,
    {
        ActionButton {
            label: label.into(),
            state: InteractionState::new(),
            on_press: Arc::new(on_press),
        }
    }

    fn width(&self) -> usize {
        // "< etichetta >"
        self.label.len() + 4
    }

    fn activate(&self) -> EventResult {
        let on_press = Arc::clone(&self.on_press);
        EventResult::with_cb(move |s| on_press(s))
    }
}

impl View for ActionButton {
    fn draw(&self, printer: &Printer) {
        let style = if self.state.is_pressed() {
            ColorStyle::highlight()
        } else if self.state.is_hovered() || printer.focused {
            ColorStyle::highlight_inactive()
        } else {
            ColorStyle::primary()
        };

        printer.with_color(style, |p| {
            p.print((0, 0), &format!("< {} >", self.label));
        });
    }

    fn required_size(&mut self, _constraint: Vec2) -> Vec2 {
        Vec2::new(self.width(), 1)
    }

    fn on_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(Key::Enter) | Event::Char(' ') => self.activate(),
            Event::Mouse {
                offset,
                position,
                event,
            } => {
                let size = Vec2::new(self.width(), 1);
                let inside = position.fits_in_rect(offset, size);
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
