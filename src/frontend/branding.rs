use yew::prelude::*;

use crate::{
    content::{PALETTES, TYPEFACES, WHY_ME},
    motion::spotlight,
    reveal::{delay_style, Entrance},
    signal::PointerMapping,
};

use super::hooks::{use_pointer, use_reveal};

#[function_component(PersonalBranding)]
pub fn personal_branding() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let pointer = use_pointer(section.clone(), PointerMapping::Offset);

    let backdrop_style = format!(
        "{} opacity: {};",
        spotlight(pointer, 800, "rgba(139, 92, 246, 0.05)", 70),
        if revealed { 1 } else { 0 }
    );

    html! {
        <section ref={section} id="personal-branding" class="branding">
            <div class="branding-spotlight" style={backdrop_style} aria-hidden="true" />
            <div class="section-inner">
                <header class={classes!("section-header", Entrance::Rise.class(revealed))}>
                    <h2 class="section-title">
                        {"Personal "}<span class="gradient-text">{"Branding"}</span>
                    </h2>
                    <p class="section-lede">
                        {"In a world of noise, intentionality is my superpower. Here's the aesthetic and strategic foundation of my work."}
                    </p>
                </header>

                <div class="branding-grid">
                    <div
                        class={classes!("card", Entrance::FromLeft.class(revealed))}
                        style={delay_style(300)}
                    >
                        <h3 class="card-title"><span class="card-title-rule" />{"Curated Typography"}</h3>
                        <ul class="typeface-list">
                            { for TYPEFACES.iter().map(|face| html! {
                                <li key={face.name} class="typeface">
                                    <div class={classes!("typeface-sample", face.class)}>{face.name}</div>
                                    <p class="typeface-description">{face.description}</p>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div
                        class={classes!("card", Entrance::FromRight.class(revealed))}
                        style={delay_style(500)}
                    >
                        <h3 class="card-title"><span class="card-title-rule card-title-rule--fuchsia" />{"Signature Palettes"}</h3>
                        <div class="palette-grid">
                            { for PALETTES.iter().map(|palette| html! {
                                <div key={palette.name} class="palette">
                                    <div class="palette-strip">
                                        { for palette.colors.iter().map(|color| html! {
                                            <div
                                                class="palette-swatch"
                                                style={format!("background-color: {color};")}
                                                title={*color}
                                            />
                                        }) }
                                    </div>
                                    <h4 class="palette-name">{palette.name}</h4>
                                    <p class="palette-vibe">{palette.vibe}</p>
                                </div>
                            }) }
                        </div>

                        <div class="philosophy">
                            <h4>{"My Brand Philosophy"}</h4>
                            <p>
                                {"Design is a silent ambassador of your brand. I focus on creating harmony between form and function."}
                            </p>
                        </div>
                    </div>
                </div>

                <div class={Entrance::RiseFar.class(revealed)} style={delay_style(700)}>
                    <h3 class="why-title">{"Why Me?"}</h3>
                    <div class="why-grid">
                        { for WHY_ME.iter().map(|pitch| html! {
                            <article key={pitch.title} class="why-card">
                                <div class="why-icon">
                                    <svg class={classes!("icon", pitch.accent)} fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d={pitch.icon_path} />
                                    </svg>
                                </div>
                                <span class="why-question">{pitch.question}</span>
                                <h4 class="why-card-title">{pitch.title}</h4>
                                <p class="why-text">{pitch.text}</p>
                            </article>
                        }) }
                    </div>
                </div>

                <div
                    class={classes!("callout", Entrance::Scale.class(revealed))}
                    style={delay_style(1000)}
                >
                    <div class="callout-copy">
                        <h3>{"Let's build something iconic."}</h3>
                        <p>
                            {"Whether you're looking for a fresh design system or a robust web application, I'm here to bring your vision to life."}
                        </p>
                    </div>
                    <a class="button button--light" href="#collaboration">{"Get in Touch"}</a>
                </div>
            </div>
        </section>
    }
}
