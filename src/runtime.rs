// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Thread-local stack of the currently active `egui::Ui`.
//!
//! egui lends a `Ui` to layout closures, but the Python-visible widget
//! functions are free functions with no way to receive it as an argument.
//! This module bridges the two: the frame loop and every nested container
//! push the `Ui` they were handed onto a thread-local stack, and widget
//! functions render into whatever is on top.
//!
//! Raw pointers are unavoidable here because the `Ui` borrow is owned by an
//! egui closure frame further up the call stack. Soundness rests on two
//! rules, both enforced by this module:
//! - an entry is pushed and popped by an RAII guard, so it never outlives
//!   the closure frame that owns the `Ui`;
//! - the stack is thread-local, so a pointer is only ever dereferenced on
//!   the thread that pushed it.

use std::cell::RefCell;

use eframe::egui;

use crate::error::{GuiError, Result};

thread_local! {
    static UI_STACK: RefCell<Vec<*mut egui::Ui>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard marking a `Ui` as current for the duration of a scope.
///
/// Dropping the guard pops the entry, so an early return or panic inside a
/// nested layout closure cannot leave a dangling pointer behind.
pub(crate) struct UiScope {
    _not_send: std::marker::PhantomData<*mut ()>,
}

impl UiScope {
    pub(crate) fn enter(ui: &mut egui::Ui) -> Self {
        UI_STACK.with(|stack| stack.borrow_mut().push(ui as *mut egui::Ui));
        Self {
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Drop for UiScope {
    fn drop(&mut self) {
        UI_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` against the innermost active `Ui`.
///
/// Fails with [`GuiError::NoActiveUi`] when called outside an update
/// callback or from a thread that never entered one.
pub(crate) fn with_current_ui<T>(f: impl FnOnce(&mut egui::Ui) -> Result<T>) -> Result<T> {
    // Copy the pointer out so the RefCell borrow is released before `f`
    // runs; containers re-enter this module while their closure is active.
    let ptr = UI_STACK
        .with(|stack| stack.borrow().last().copied())
        .ok_or(GuiError::NoActiveUi)?;

    // SAFETY: the entry was pushed by `UiScope::enter` on this thread and
    // stays valid until the guard drops, which happens strictly after `f`
    // returns. Only the top of the stack is dereferenced, so no second
    // `&mut` to the same `Ui` is live while `f` runs.
    let ui = unsafe { &mut *ptr };
    f(ui)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless_frame(mut body: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| body(ui));
        });
    }

    #[test]
    fn no_active_ui_outside_a_frame() {
        let result = with_current_ui(|_| Ok(()));
        assert!(matches!(result, Err(GuiError::NoActiveUi)));
    }

    #[test]
    fn current_ui_is_usable_inside_a_scope() {
        headless_frame(|ui| {
            let _scope = UiScope::enter(ui);
            let result = with_current_ui(|ui| {
                ui.label("probe");
                Ok(())
            });
            assert!(result.is_ok());
        });
    }

    #[test]
    fn dropping_the_guard_pops_the_entry() {
        headless_frame(|ui| {
            let scope = UiScope::enter(ui);
            assert!(with_current_ui(|_| Ok(())).is_ok());
            drop(scope);
            assert!(matches!(
                with_current_ui(|_| Ok(())),
                Err(GuiError::NoActiveUi)
            ));
        });
    }

    #[test]
    fn nested_scopes_expose_the_innermost_ui() {
        headless_frame(|ui| {
            let _outer = UiScope::enter(ui);
            let outer_addr =
                with_current_ui(|ui| Ok(ui as *mut egui::Ui as usize)).unwrap();

            ui.horizontal(|child| {
                let _inner = UiScope::enter(child);
                let inner_addr =
                    with_current_ui(|ui| Ok(ui as *mut egui::Ui as usize)).unwrap();
                assert_ne!(inner_addr, outer_addr);
            });

            // The inner guard has dropped; the outer Ui is current again.
            let addr = with_current_ui(|ui| Ok(ui as *mut egui::Ui as usize)).unwrap();
            assert_eq!(addr, outer_addr);
        });
    }
}
