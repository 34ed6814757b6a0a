use leptos::{ev, prelude::*};

use super::data::{filter_projects, Project, ProjectFilter};

const ACTIVE_TAB: &str =
    "px-4 py-2 rounded-lg transition-all bg-indigo-600 text-white shadow-md";
const INACTIVE_TAB: &str = "px-4 py-2 rounded-lg transition-all bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700";

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);
    let (selected, set_selected) = signal(None::<&'static Project>);

    view! {
        <section id="projects" class="py-20 gradient-bg">
            <div class="container-custom">
                <h2 class="section-title">"My Projects"</h2>

                // Category filters
                <div class="flex flex-wrap justify-center gap-2 md:gap-4 mb-12">
                    {ProjectFilter::ALL_FILTERS
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    on:click=move |_| set_filter(f)
                                    class=move || {
                                        if filter() == f { ACTIVE_TAB } else { INACTIVE_TAB }
                                    }
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Projects grid
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        filter_projects(filter())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project set_selected /> })
                            .collect_view()
                    }}
                </div>
            </div>

            // Detail overlay
            {move || {
                selected().map(|project| view! { <ProjectModal project set_selected /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    set_selected: WriteSignal<Option<&'static Project>>,
) -> impl IntoView {
    view! {
        <div class="group bg-white dark:bg-gray-800 rounded-lg overflow-hidden shadow-md hover:shadow-xl hover:-translate-y-2 transition-all">
            <div class="relative overflow-hidden aspect-video">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover object-center transition-transform duration-500 group-hover:scale-110"
                    loading="lazy"
                />
                <div class="absolute inset-0 bg-indigo-600/20 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center">
                    <button
                        on:click=move |_| set_selected(Some(project))
                        class="p-3 bg-white rounded-full shadow-lg text-indigo-600 text-xl leading-none"
                        aria-label="View project details"
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                    {project.title}
                </h3>
                <p class="text-gray-700 dark:text-gray-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 text-xs rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    <a
                        href=project.source_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-700 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white flex items-center"
                    >
                        <i class="devicon-github-original mr-1"></i>
                        <span>"Code"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    set_selected: WriteSignal<Option<&'static Project>>,
) -> impl IntoView {
    // Close on Escape
    let esc_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_selected(None);
        }
    });
    on_cleanup(move || esc_handle.remove());

    // Lock body scroll while the overlay is up
    Effect::new(move |_| {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    });
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "auto");
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70"
            on:click=move |_| set_selected(None)
        >
            <div
                class="bg-white dark:bg-gray-800 rounded-lg shadow-2xl max-w-4xl w-full max-h-[90vh] overflow-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="relative">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-64 object-cover object-center"
                    />
                    <button
                        on:click=move |_| set_selected(None)
                        class="absolute top-4 right-4 p-2 bg-white/70 dark:bg-gray-800/70 rounded-full text-gray-900 dark:text-white leading-none"
                        aria-label="Close modal"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6">
                    <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">
                        {project.title}
                    </h3>

                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-indigo-100 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300 text-sm rounded-full">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="text-gray-700 dark:text-gray-300 mb-6 leading-relaxed">
                        {project.details}
                    </p>

                    <div class="flex flex-wrap gap-4">
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            "View Live Site"
                        </a>
                        <a
                            href=project.source_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "View Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
