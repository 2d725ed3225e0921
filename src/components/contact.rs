//! Contact section: reach-out cards, social links, CV download, and the
//! submission form.
//!
//! SUBMISSION FLOW
//! ===============
//! Submit validates the fields, then the delivery configuration, before
//! any network attempt; either failure surfaces immediately and leaves the
//! fields alone. Only a confirmed send resets the form (see
//! `state::contact`).

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;
use crate::content::{CONTACT_CHANNELS, PROFILE};
use crate::net::emailjs::{EmailConfig, failure_notice, send_contact_email};
use crate::state::contact::{ContactForm, SubmitStatus};
use crate::util::timestamp::submission_timestamp;

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(SubmitStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_busy() {
            return;
        }
        let fields = match form.get().validated() {
            Ok(fields) => fields,
            Err(message) => {
                status.set(SubmitStatus::Failed(message.to_owned()));
                return;
            }
        };
        let config = EmailConfig::from_build_env();
        if let Err(message) = config.validate() {
            status.set(SubmitStatus::Failed(message.to_owned()));
            return;
        }

        status.set(SubmitStatus::Sending);
        leptos::task::spawn_local(async move {
            let time = submission_timestamp();
            match send_contact_email(&config, &fields, &time).await {
                Ok(()) => {
                    form.update(ContactForm::reset);
                    status.set(SubmitStatus::Sent);
                }
                Err(detail) => status.set(SubmitStatus::Failed(failure_notice(&detail))),
            }
        });
    };

    view! {
        <section class="section contact" id="contact">
            <h2 class="section__title">"Let's Connect"</h2>
            <p class="section__subtitle">"Ready to start your next project? Let's work together!"</p>

            <div class="contact__columns">
                <div class="contact__info">
                    <h3>"Get in Touch"</h3>
                    <div class="contact__channels">
                        {CONTACT_CHANNELS
                            .iter()
                            .map(|channel| {
                                view! {
                                    <div class="contact__channel">
                                        <h4 class="contact__channel-title">{channel.title}</h4>
                                        {match channel.href {
                                            Some(href) => view! {
                                                <a class="contact__channel-value" href=href>
                                                    {channel.value}
                                                </a>
                                            }
                                                .into_any(),
                                            None => view! {
                                                <span class="contact__channel-value">{channel.value}</span>
                                            }
                                                .into_any(),
                                        }}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <h4 class="contact__follow">"Follow Me"</h4>
                    <SocialLinks/>

                    <a
                        class="button button--primary contact__cv"
                        href=PROFILE.cv_href
                        download=PROFILE.cv_file_name
                    >
                        "Download CV"
                    </a>

                    <div class="contact__availability">
                        <span class="contact__availability-dot"></span>
                        <div>
                            <h4>{PROFILE.availability}</h4>
                            <p>{PROFILE.availability_detail}</p>
                        </div>
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <h3>"Send Message"</h3>
                    <div class="contact-form__row">
                        <label class="contact-form__field">
                            "Your Name *"
                            <input
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    form.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="contact-form__field">
                            "Your Email *"
                            <input
                                type="email"
                                placeholder="john@example.com"
                                prop:value=move || form.get().email
                                on:input=move |ev| {
                                    form.update(|f| f.email = event_target_value(&ev));
                                }
                            />
                        </label>
                    </div>
                    <label class="contact-form__field">
                        "Subject *"
                        <input
                            type="text"
                            placeholder="Project Inquiry"
                            prop:value=move || form.get().subject
                            on:input=move |ev| {
                                form.update(|f| f.subject = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="contact-form__field">
                        "Your Message *"
                        <textarea
                            rows="5"
                            placeholder="Tell me about your project..."
                            prop:value=move || form.get().message
                            on:input=move |ev| {
                                form.update(|f| f.message = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <button
                        class="button button--primary contact-form__submit"
                        type="submit"
                        disabled=move || status.get().is_busy()
                    >
                        "Send Message"
                    </button>
                    <Show when=move || status.get().notice().is_some()>
                        <p
                            class="contact-form__notice"
                            class=("contact-form__notice--error", move || status.get().is_error())
                        >
                            {move || status.get().notice().map(str::to_owned).unwrap_or_default()}
                        </p>
                    </Show>
                </form>
            </div>
        </section>
    }
}
