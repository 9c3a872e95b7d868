use yew::prelude::*;

use crate::{
    content::{FieldKind, FormField, CONTACT_FIELDS, SOCIAL_LINKS},
    motion::{drift, tilt},
    reveal::{delay_style, Entrance},
    signal::PointerMapping,
};

use super::hooks::{use_pointer, use_reveal};

fn form_field(field: &FormField) -> Html {
    let control = match field.kind {
        FieldKind::Text => html! {
            <input id={field.name} name={field.name} type="text" placeholder={field.placeholder} />
        },
        FieldKind::Email => html! {
            <input id={field.name} name={field.name} type="email" placeholder={field.placeholder} />
        },
        FieldKind::Multiline { rows } => html! {
            <textarea
                id={field.name}
                name={field.name}
                rows={rows.to_string()}
                placeholder={field.placeholder}
            />
        },
    };

    html! {
        <div key={field.name} class="form-field">
            <label for={field.name}>{field.label}</label>
            {control}
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let pointer = use_pointer(section.clone(), PointerMapping::Centered);

    // No transport behind the form.
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        tracing::debug!("contact form submit ignored");
    });

    html! {
        <section ref={section} id="collaboration" class="contact">
            <div class="contact-ambient" aria-hidden="true">
                <div class="contact-blob contact-blob--violet" style={drift(pointer, 50.0)} />
                <div class="contact-blob contact-blob--fuchsia" style={drift(pointer, -30.0)} />
                <div class="contact-dots" />
            </div>

            <div class="section-inner contact-split">
                <div class={Entrance::FromLeft.class(revealed)}>
                    <div class="status-badge status-badge--compact">
                        <span class="ping-dot" aria-hidden="true" />
                        <span class="status-label">{"Open for new projects"}</span>
                    </div>

                    <h2 class="contact-title">
                        {"LET'S"}<br />
                        <span class="gradient-text">{"BUILD"}</span><br />
                        {"BEYOND."}
                    </h2>

                    <p class="section-lede">
                        {"Have an idea that needs a digital heartbeat? I bring logic and aesthetics to every pixel."}
                    </p>

                    <ul class="social-links">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <li key={*social}><a href="#">{*social}</a></li>
                        }) }
                    </ul>

                    <div class="contact-orbit" style={tilt(pointer, 20.0, 20.0)} aria-hidden="true">
                        <div class="contact-orbit-ring" />
                        <div class="contact-orbit-square" />
                        <div class="contact-orbit-core" />
                    </div>
                </div>

                <div class={Entrance::RiseFar.class(revealed)} style={delay_style(300)}>
                    <div class="form-card">
                        <div class="form-card-glow" aria-hidden="true" />
                        <form class="contact-form" onsubmit={onsubmit}>
                            { for CONTACT_FIELDS.iter().map(form_field) }
                            <button type="submit" class="submit-button">
                                <span class="submit-label">
                                    {"Send Message"}
                                    <svg class="button-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                        <path stroke-linecap="round" stroke-linejoin="round" d="M14 5l7 7m0 0l-7 7m7-7H3" />
                                    </svg>
                                </span>
                            </button>
                        </form>
                        <div class="form-hint" aria-hidden="true">
                            <span>{"WAITING FOR INPUT..."}</span>
                            <span>{"AVAILABLE 24/7"}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="contact-noise" aria-hidden="true" />
        </section>
    }
}
