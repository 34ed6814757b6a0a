use leptos::prelude::*;

use super::data::{EXPERIENCES, RESUME_URL};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-white dark:bg-gray-900">
            <div class="container-custom">
                <h2 class="section-title">"Work Experience"</h2>

                <div class="relative">
                    // Timeline line
                    <div class="hidden md:block absolute left-1/2 transform -translate-x-1/2 h-full w-0.5 bg-gray-200 dark:bg-gray-700"></div>

                    <div class="space-y-12 relative">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                // Entries alternate sides of the timeline
                                let side = if index % 2 == 0 {
                                    "md:w-1/2 md:ml-auto md:pl-10"
                                } else {
                                    "md:w-1/2 md:mr-auto md:pr-10"
                                };
                                view! {
                                    <div class="relative">
                                        // Timeline dot
                                        <div class="hidden md:block absolute left-1/2 transform -translate-x-1/2 -translate-y-4 w-4 h-4 rounded-full bg-indigo-600 dark:bg-indigo-500 z-10"></div>

                                        <div class=side>
                                            <div class="bg-gray-50 dark:bg-gray-800 p-6 rounded-lg shadow-md hover:shadow-lg transition-shadow">
                                                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                                                    {exp.title}
                                                </h3>
                                                <h4 class="text-indigo-600 dark:text-indigo-400 font-medium mb-4">
                                                    {exp.company}
                                                </h4>

                                                <div class="flex flex-wrap gap-4 mb-4 text-sm text-gray-600 dark:text-gray-400">
                                                    <span>{exp.period}</span>
                                                    <span>{exp.location}</span>
                                                </div>

                                                <ul class="space-y-2">
                                                    {exp
                                                        .highlights
                                                        .iter()
                                                        .map(|item| {
                                                            view! {
                                                                <li class="flex items-start">
                                                                    <span class="inline-block w-1.5 h-1.5 rounded-full bg-indigo-600 dark:bg-indigo-400 mt-2 mr-2"></span>
                                                                    <span class="text-gray-700 dark:text-gray-300">
                                                                        {*item}
                                                                    </span>
                                                                </li>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-12 text-center">
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-outline inline-flex items-center gap-2"
                    >
                        "View Full Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}
