use leptos::prelude::*;

use super::data::SOCIAL_LINKS;
use super::scene::HeroOrbit;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            // Decorative 3D background
            <div class="absolute inset-0 z-0">
                <HeroOrbit />
            </div>

            <div class="container-custom relative z-10">
                <div class="max-w-3xl mx-auto text-center">
                    <h1 class="mb-6 text-4xl md:text-6xl font-bold text-gray-900 dark:text-white">
                        <span class="block">"Creative Developer"</span>
                        <span class="text-indigo-600 dark:text-indigo-400 block mt-2">
                            "& Designer"
                        </span>
                    </h1>

                    <p class="text-lg md:text-xl text-gray-700 dark:text-gray-300 mb-8 leading-relaxed">
                        "I build exceptional digital experiences that combine creativity with technical precision.
                        Transforming ideas into beautiful, functional realities is my passion."
                    </p>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <a href="#projects" class="btn btn-primary">
                            "View My Work"
                        </a>
                        <a href="#contact" class="btn btn-outline">
                            "Get In Touch"
                        </a>
                    </div>

                    <div class="flex justify-center space-x-6 mb-16">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 rounded-full text-2xl text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400 transition-colors"
                                        aria-label=social.label
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2">
                    <a
                        href="#about"
                        class="text-gray-600 dark:text-gray-400 flex flex-col items-center animate-bounce"
                    >
                        <span class="mb-2 text-sm">"Scroll Down"</span>
                        <span aria-hidden="true">"▾"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
