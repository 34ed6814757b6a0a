use leptos::prelude::*;

use super::data::SOCIAL_LINKS;

// Set by build.rs so the client never needs a wall clock.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-gray-900 text-white">
            <div class="container-custom">
                <div class="flex flex-col items-center">
                    <a
                        href="#home"
                        class="p-3 bg-indigo-600 hover:bg-indigo-700 rounded-full shadow-lg mb-8 transition-all hover:-translate-y-1 leading-none"
                        aria-label="Back to top"
                    >
                        "▴"
                    </a>

                    <div class="text-center mb-6">
                        <h3 class="text-2xl font-bold text-white mb-2">"Portfolio"</h3>
                        <p class="text-gray-400 max-w-md mx-auto">
                            "Creating beautiful digital experiences with passion and precision."
                        </p>
                    </div>

                    <div class="flex justify-center space-x-6 mb-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-400 hover:text-white transition-colors"
                                        aria-label=social.label
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="w-24 h-px bg-gray-700 mb-8"></div>

                    <p class="text-gray-400 text-sm">
                        "© " {BUILD_YEAR} " Portfolio. All rights reserved."
                    </p>

                    <p class="text-gray-500 text-xs mt-2">
                        "Made with Rust, Leptos & WebAssembly"
                    </p>
                </div>
            </div>
        </footer>
    }
}
