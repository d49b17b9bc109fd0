use log::warn;
use shared::theme::Theme;
use web_sys::window;
use yew::prelude::*;

/// Mirrors `theme` onto the `<html>` element as a `light` or `dark` class.
#[hook]
pub fn use_theme_class(theme: Theme) {
    use_effect_with(theme, |theme| {
        apply_theme_class(*theme);
        || ()
    });
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element to apply {} theme to", theme);
        return;
    };

    let classes = root.class_list();
    for (class, enabled) in [(Theme::Dark, theme.is_dark()), (Theme::Light, !theme.is_dark())] {
        if classes.toggle_with_force(class.as_str(), enabled).is_err() {
            warn!("Failed to set {} class on document element", class);
        }
    }
}
