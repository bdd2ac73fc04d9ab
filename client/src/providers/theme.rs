//! Theme context.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Provides `RwSignal<Theme>`.
///
/// In the browser the stored preference is loaded after mount, and every
/// later change is applied to `<html>` and persisted.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    Effect::new(move |prev: Option<Theme>| {
        let current = theme.get();
        if prev.is_none() {
            let stored = crate::util::theme::read_preference();
            crate::util::theme::apply(stored);
            if stored != current {
                theme.set(stored);
            }
            return stored;
        }
        crate::util::theme::apply(current);
        crate::util::theme::store(current);
        current
    });

    children()
}
