use std::cell::RefCell;
use std::rc::Rc;

use egui::{Align2, Context, WidgetText};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

/// Shared handle for surfacing non-blocking advisories. Cloned into
/// panels; every clone feeds the same toast stack.
#[derive(Clone)]
pub struct Operation {
    toasts: Rc<RefCell<Toasts>>,
}

impl Default for Operation {
    fn default() -> Self {
        Operation {
            toasts: Rc::new(RefCell::new(
                Toasts::new()
                    .anchor(Align2::RIGHT_BOTTOM, (-10.0, -10.0))
                    .direction(egui::Direction::BottomUp),
            )),
        }
    }
}

impl Operation {
    pub fn add_toast(&self, toast: Toast) {
        self.toasts.borrow_mut().add(toast);
    }

    pub fn add_warn_toast(&self, text: impl Into<WidgetText>) {
        self.add_toast(Toast {
            text: text.into(),
            kind: ToastKind::Warning,
            options: ToastOptions::default()
                .show_icon(true)
                .duration_in_seconds(5.0)
                .show_progress(true),
        });
    }

    pub fn add_error_toast(&self, text: impl Into<WidgetText>) {
        self.add_toast(Toast {
            text: text.into(),
            kind: ToastKind::Error,
            options: ToastOptions::default()
                .show_icon(true)
                .duration_in_seconds(5.0)
                .show_progress(true),
        });
    }

    pub fn show(&self, ctx: &Context) {
        self.toasts.borrow_mut().show(ctx);
    }
}
