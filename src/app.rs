mod about;
mod contact;
mod data;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod scene;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use theme::{provide_theme, use_theme, ThemeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Single injection point for the light/dark flag; subtrees read it
    // from context and only ThemeToggle flips it.
    provide_theme();
    let theme = use_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Dipayan Debnath - {title}") />

        <Router>
            // Tailwind's `dark:` variants key off this class
            <div class=move || if theme.is_dark() { "dark" } else { "" }>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

/// The single page: every section is static content under one scroll.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Header />
        <main>
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Contact />
        </main>
        <Footer />
        <div class="fixed bottom-4 right-4 z-50">
            <ThemeToggle />
        </div>
    }
}
