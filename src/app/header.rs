use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::data::NAV_LINKS;

/// Scroll offset (px) past which the header switches to its compact,
/// opaque treatment. No hysteresis - the comparison alone decides.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[component]
pub fn Header() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    // The full-screen mobile menu covers the page, so lock body scroll
    // while it is open and restore it on close.
    Effect::new(move |_| {
        let open = menu_open.get();
        if let Some(body) = document().body() {
            let value = if open { "hidden" } else { "auto" };
            let _ = body.style().set_property("overflow", value);
        }
    });

    view! {
        <header class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-3 bg-white/90 dark:bg-gray-900/90 shadow-md backdrop-blur-sm"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-6 bg-transparent"
            }
        }>
            <div class="container-custom">
                <nav class="flex items-center justify-between">
                    <a href="#home" class="text-xl font-bold text-indigo-600 dark:text-indigo-400">
                        "DD"
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center space-x-8">
                        <ul class="flex space-x-8">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                class="font-medium text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400 transition-colors"
                                            >
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Mobile navigation toggle
                    <div class="flex items-center md:hidden">
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="p-2 text-2xl leading-none text-gray-700 dark:text-gray-300"
                            aria-label="Toggle menu"
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </nav>
            </div>

            // Mobile menu
            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="fixed inset-0 top-16 bg-white dark:bg-gray-900 z-40 md:hidden">
                                <div class="container-custom py-6">
                                    <ul class="flex flex-col space-y-6">
                                        {NAV_LINKS
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.href
                                                            on:click=move |_| set_menu_open(false)
                                                            class="text-xl font-medium text-gray-800 dark:text-gray-200 hover:text-indigo-600 dark:hover:text-indigo-400"
                                                        >
                                                            {link.name}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_at_threshold_keeps_expanded_header() {
        assert!(!is_scrolled(SCROLL_THRESHOLD));
    }

    #[test]
    fn one_unit_around_threshold_is_deterministic() {
        assert!(!is_scrolled(SCROLL_THRESHOLD - 1.0));
        assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
    }

    #[test]
    fn top_of_page_is_expanded() {
        assert!(!is_scrolled(0.0));
    }
}
