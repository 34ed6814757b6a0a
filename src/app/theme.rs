use leptos::prelude::*;

/// Light/dark flag for the whole page. Dark is the default variant.
/// The flag lives only in memory; reloading the page starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Shared handle over the theme flag. `toggle` is the only mutation
/// entry point; everything else reads.
#[derive(Clone, Copy)]
pub struct ThemeContext(RwSignal<Theme>);

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.0.get().is_dark()
    }

    pub fn toggle(&self) {
        self.0.update(|theme| *theme = theme.toggled());
    }
}

pub fn provide_theme() {
    provide_context(ThemeContext(RwSignal::new(Theme::default())));
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            on:click=move |_| theme.toggle()
            class="p-3 rounded-full bg-white dark:bg-gray-800 shadow-lg text-indigo-600 dark:text-indigo-400 text-xl leading-none hover:scale-110 active:scale-95 transition-transform"
            aria-label=move || {
                if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_original_value() {
        for start in [Theme::Light, Theme::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn toggle_flips_the_variant() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn default_theme_is_dark() {
        assert!(Theme::default().is_dark());
    }
}
