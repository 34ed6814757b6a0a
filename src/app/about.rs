use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::data::RESUME_URL;

const GREETING: &str = "Hey there, I'm Dipayan Debnath";

/// One tick per 50ms - matches the typing and deleting speed.
const TYPE_TICK_MS: u64 = 50;
/// Ticks the complete string is held before deleting (2s).
const HOLD_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Tick-driven typed-text effect: type the string one char at a time,
/// hold it, delete it, and loop forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn tick(&mut self) {
        if self.chars.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown == self.chars.len() {
                    self.phase = Phase::Holding(HOLD_TICKS);
                }
            }
            Phase::Holding(0) => {
                self.phase = Phase::Deleting;
            }
            Phase::Holding(remaining) => {
                self.phase = Phase::Holding(remaining - 1);
            }
            Phase::Deleting => {
                self.shown -= 1;
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[component]
pub fn About() -> impl IntoView {
    let (typed, set_typed) = signal(String::new());
    let typewriter = StoredValue::new(Typewriter::new(GREETING));

    let _pausable = use_interval_fn(
        move || {
            typewriter.update_value(|tw| tw.tick());
            set_typed(typewriter.with_value(|tw| tw.text()));
        },
        TYPE_TICK_MS,
    );

    view! {
        <section id="about" class="py-24 bg-white dark:bg-gray-900">
            <div class="container-custom">
                <h2 class="section-title mb-16">"About Me"</h2>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="relative flex justify-center">
                        <div class="relative w-60 h-60 overflow-hidden rounded-full shadow-xl">
                            <img
                                src="/profile.jpg"
                                alt="Professional portrait"
                                class="w-full h-full object-cover object-center"
                                loading="lazy"
                            />
                            <div class="absolute inset-0 bg-indigo-600/10 dark:bg-indigo-900/20"></div>
                        </div>
                    </div>

                    <div class="text-center lg:text-left">
                        <h3 class="text-2xl sm:text-3xl md:text-4xl font-bold mb-6 text-gray-900 dark:text-white min-h-[2.5rem]">
                            {move || typed()}
                            <span class="animate-pulse" aria-hidden="true">
                                "|"
                            </span>
                        </h3>
                        <p class="text-lg text-gray-700 dark:text-gray-300 mb-6 leading-relaxed">
                            "I'm a creative technologist passionate about building digital experiences that blend functionality with finesse. With 5+ years of experience, I specialize in crafting responsive, user-friendly interfaces that delight and perform."
                        </p>
                        <p class="text-lg text-gray-700 dark:text-gray-300 mb-8 leading-relaxed">
                            "My toolkit includes React, TypeScript, Node, and modern web technologies - but what drives me is solving problems and delivering intuitive solutions that make an impact. Whether I'm writing code or shaping UX, I aim to turn ideas into seamless experiences."
                        </p>

                        <div class="flex justify-center lg:justify-start gap-4 flex-wrap">
                            <a href="#contact" class="btn btn-primary">
                                "Let's Connect"
                            </a>
                            <a
                                href=RESUME_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-outline"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
        tw.tick();
        assert_eq!(tw.text(), "abc");
    }

    #[test]
    fn holds_full_string_for_the_back_delay_window() {
        let mut tw = Typewriter::new("abc");
        for _ in 0..3 {
            tw.tick();
        }
        // HOLD_TICKS of holding plus the tick that switches to deleting
        for _ in 0..=HOLD_TICKS {
            tw.tick();
            assert_eq!(tw.text(), "abc");
        }
        tw.tick();
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn deletes_back_to_empty_and_loops() {
        let mut tw = Typewriter::new("hi");
        // type, hold, switch
        for _ in 0..(2 + HOLD_TICKS as usize + 1) {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.text(), "h");
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "h"); // typing again
    }

    #[test]
    fn empty_string_never_panics() {
        let mut tw = Typewriter::new("");
        for _ in 0..100 {
            tw.tick();
        }
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn handles_multibyte_chars() {
        let mut tw = Typewriter::new("héllo");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }
}
