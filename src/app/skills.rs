use leptos::prelude::*;

use super::data::SkillCategory;
use super::scene::WordCloud;

const ACTIVE_TAB: &str =
    "px-4 py-2 rounded-lg flex items-center gap-2 transition-all bg-indigo-600 text-white shadow-md";
const INACTIVE_TAB: &str = "px-4 py-2 rounded-lg flex items-center gap-2 transition-all bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";

#[component]
pub fn Skills() -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::Frontend);

    view! {
        <section id="skills" class="relative py-20 gradient-bg overflow-hidden">
            // Decorative word cloud behind the grid
            <div class="absolute inset-0 z-0 opacity-40 pointer-events-none">
                <WordCloud />
            </div>

            <div class="container-custom relative z-10">
                <h2 class="section-title">"My Skills"</h2>

                // Category tabs - the closed set of groups, nothing else
                <div class="flex flex-wrap justify-center gap-2 md:gap-4 mb-12">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    on:click=move |_| set_active(category)
                                    class=move || {
                                        if active() == category { ACTIVE_TAB } else { INACTIVE_TAB }
                                    }
                                >
                                    <span>{category.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Skills grid for the active category
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    {move || {
                        active()
                            .skills()
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md flex flex-col items-center hover:-translate-y-1 transition-transform">
                                        <img
                                            src=skill.logo
                                            alt=format!("{} logo", skill.name)
                                            class="w-16 h-16 mb-4"
                                            loading="lazy"
                                        />
                                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white text-center">
                                            {skill.name}
                                        </h3>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
