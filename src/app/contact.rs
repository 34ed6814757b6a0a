use std::time::Duration;

use leptos::{ev, prelude::*};
use serde::Serialize;
use thiserror::Error;

use super::data::SOCIAL_LINKS;

/// Fixed delay standing in for the network round trip.
pub const SUBMIT_DELAY_MS: u64 = 1500;
/// How long the success banner stays up before the form returns to idle.
pub const RESET_DELAY_MS: u64 = 5000;

/// Transient draft of the contact form. It never leaves the page - the
/// simulated send only logs the payload it would have posted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0} before sending.")]
    MissingField(&'static str),
    #[error("That doesn't look like an email address.")]
    InvalidEmail,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::MissingField("subject"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Submission lifecycle. There is no real network call - Submitting
/// resolves to Success after a fixed delay, which resets to Idle after
/// another. Timers are fire-and-forget; last one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmitState {
    /// Submit intent: only an idle form with a valid draft starts the
    /// send. Repeated submits while in flight are ignored.
    pub fn begin(self, draft: &ContactDraft) -> Result<Self, ContactError> {
        if self != SubmitState::Idle {
            return Ok(self);
        }
        draft.validate()?;
        Ok(SubmitState::Submitting)
    }

    pub fn complete(self) -> Self {
        match self {
            SubmitState::Submitting => SubmitState::Success,
            other => other,
        }
    }

    pub fn reset(self) -> Self {
        SubmitState::Idle
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let (draft, set_draft) = signal(ContactDraft::default());
    let (state, set_state) = signal(SubmitState::default());
    let (error, set_error) = signal(None::<ContactError>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        match state.get_untracked().begin(&current) {
            Err(err) => set_error(Some(err)),
            Ok(SubmitState::Submitting) => {
                set_error(None);
                set_state(SubmitState::Submitting);
                // The real request contract was never defined; log the
                // payload the send would have carried.
                match serde_json::to_string(&current) {
                    Ok(payload) => log::info!("simulated contact submission: {payload}"),
                    Err(err) => log::warn!("could not serialize contact payload: {err}"),
                }
                set_timeout(
                    move || {
                        set_state.update(|s| *s = s.complete());
                        set_draft(ContactDraft::default());
                        set_timeout(
                            move || set_state.update(|s| *s = s.reset()),
                            Duration::from_millis(RESET_DELAY_MS),
                        );
                    },
                    Duration::from_millis(SUBMIT_DELAY_MS),
                );
            }
            Ok(_) => {}
        }
    };

    view! {
        <section id="contact" class="py-20 bg-white dark:bg-gray-900">
            <div class="container-custom">
                <h2 class="section-title">"Get In Touch"</h2>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                    // Contact information
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                            "Contact Information"
                        </h3>
                        <p class="text-gray-700 dark:text-gray-300 mb-8 leading-relaxed">
                            "Feel free to reach out if you have any questions or want to discuss a potential collaboration.
                            I'm always open to new opportunities and interesting projects."
                        </p>

                        <div class="space-y-6">
                            <ContactDetail label="Email">
                                <a
                                    href="mailto:hello@example.com"
                                    class="text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                >
                                    "hello@example.com"
                                </a>
                            </ContactDetail>
                            <ContactDetail label="Phone">
                                <a
                                    href="tel:+11234567890"
                                    class="text-gray-700 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                >
                                    "+1 (123) 456-7890"
                                </a>
                            </ContactDetail>
                            <ContactDetail label="Location">
                                <p class="text-gray-700 dark:text-gray-300">
                                    "San Francisco, California"
                                </p>
                            </ContactDetail>
                        </div>

                        <div class="mt-10">
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">
                                "Connect with me"
                            </h4>
                            <div class="flex space-x-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="p-3 bg-gray-100 dark:bg-gray-800 rounded-full text-xl text-gray-700 dark:text-gray-300 hover:bg-indigo-100 dark:hover:bg-indigo-900/30 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                                aria-label=social.label
                                            >
                                                <i class=social.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    // Contact form
                    <div>
                        <div class="bg-gray-50 dark:bg-gray-800 p-8 rounded-lg shadow-md">
                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">
                                "Send Me a Message"
                            </h3>

                            {move || {
                                (state() == SubmitState::Success)
                                    .then(|| {
                                        view! {
                                            <div class="mb-6 p-4 bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded-lg">
                                                "Message sent successfully! I'll get back to you soon."
                                            </div>
                                        }
                                    })
                            }}

                            {move || {
                                error()
                                    .map(|err| {
                                        view! {
                                            <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded-lg">
                                                {err.to_string()}
                                            </div>
                                        }
                                    })
                            }}

                            <form on:submit=submit>
                                <FormField label="Your Name" id="name" input_type="text" placeholder="John Doe"
                                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                                    on_input=move |value| set_draft.update(|d| d.name = value) />
                                <FormField label="Your Email" id="email" input_type="email" placeholder="example@domain.com"
                                    value=Signal::derive(move || draft.with(|d| d.email.clone()))
                                    on_input=move |value| set_draft.update(|d| d.email = value) />
                                <FormField label="Subject" id="subject" input_type="text" placeholder="Project Inquiry"
                                    value=Signal::derive(move || draft.with(|d| d.subject.clone()))
                                    on_input=move |value| set_draft.update(|d| d.subject = value) />

                                <div class="mb-6">
                                    <label
                                        for="message"
                                        class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                    >
                                        "Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required
                                        rows="5"
                                        placeholder="Your message here..."
                                        prop:value=move || draft.with(|d| d.message.clone())
                                        on:input=move |ev| {
                                            set_draft.update(|d| d.message = event_target_value(&ev))
                                        }
                                        class="w-full p-3 border border-gray-300 dark:border-gray-700 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    disabled=move || state() == SubmitState::Submitting
                                    class="w-full btn btn-primary flex items-center justify-center disabled:opacity-70"
                                >
                                    {move || {
                                        if state() == SubmitState::Submitting {
                                            "Sending..."
                                        } else {
                                            "Send Message"
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <div>
                <h4 class="text-lg font-semibold text-gray-900 dark:text-white mb-1">{label}</h4>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn FormField(
    label: &'static str,
    id: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label
                for=id
                class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
            >
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=id
                required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full p-3 border border-gray-300 dark:border-gray-700 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Interested in working together.".to_string(),
        }
    }

    #[test]
    fn valid_draft_starts_submitting() {
        let state = SubmitState::Idle.begin(&full_draft()).unwrap();
        assert_eq!(state, SubmitState::Submitting);
    }

    #[test]
    fn submitting_completes_to_success_then_resets_to_idle() {
        let state = SubmitState::Idle.begin(&full_draft()).unwrap();
        let state = state.complete();
        assert_eq!(state, SubmitState::Success);
        assert_eq!(state.reset(), SubmitState::Idle);
    }

    #[test]
    fn submit_while_in_flight_is_ignored() {
        assert_eq!(
            SubmitState::Submitting.begin(&full_draft()).unwrap(),
            SubmitState::Submitting
        );
        assert_eq!(
            SubmitState::Success.begin(&full_draft()).unwrap(),
            SubmitState::Success
        );
    }

    #[test]
    fn complete_only_applies_to_an_in_flight_send() {
        assert_eq!(SubmitState::Idle.complete(), SubmitState::Idle);
        assert_eq!(SubmitState::Success.complete(), SubmitState::Success);
    }

    #[test]
    fn each_missing_field_is_reported() {
        for field in ["name", "email", "subject", "message"] {
            let mut draft = full_draft();
            match field {
                "name" => draft.name.clear(),
                "email" => draft.email.clear(),
                "subject" => draft.subject.clear(),
                _ => draft.message.clear(),
            }
            assert_eq!(draft.validate(), Err(ContactError::MissingField(field)));
        }
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut draft = full_draft();
        draft.subject = "   ".to_string();
        assert_eq!(
            draft.validate(),
            Err(ContactError::MissingField("subject"))
        );
    }

    #[test]
    fn implausible_email_is_rejected() {
        for email in ["not-an-email", "@example.com", "ada@"] {
            let mut draft = full_draft();
            draft.email = email.to_string();
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail));
        }
    }

    #[test]
    fn invalid_draft_never_leaves_idle() {
        let mut draft = full_draft();
        draft.email = "nope".to_string();
        assert!(SubmitState::Idle.begin(&draft).is_err());
    }

    #[test]
    fn payload_serializes_every_field() {
        let json = serde_json::to_string(&full_draft()).unwrap();
        for key in ["name", "email", "subject", "message"] {
            assert!(json.contains(key));
        }
    }
}
