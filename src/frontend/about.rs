use yew::prelude::*;

use crate::{
    content::{FLOATING_WORDS, INTERESTS, POWER_STACK, POWER_STACK_FEATURED},
    motion::{floating_words, kinetic_background, tilt},
    reveal::{delay_style, Entrance},
    signal::PointerMapping,
    viewport::ViewportClass,
};

use super::{
    hooks::{use_animation_clock, use_pointer, use_reveal, use_viewport_width},
    prefers_reduced_motion,
};

#[function_component(AboutMe)]
pub fn about_me() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let pointer = use_pointer(section.clone(), PointerMapping::Centered);
    let desktop = !ViewportClass::from_width(use_viewport_width()).is_mobile();
    let reduced_motion = use_memo((), |_| prefers_reduced_motion());
    let seconds = use_animation_clock(desktop && !*reduced_motion);

    let bio_tilt = if desktop {
        tilt(pointer, -1.5, 1.5)
    } else {
        "transform: none; transform-style: preserve-3d;".to_string()
    };

    html! {
        <section ref={section} id="biography" class="about">
            <div
                class="about-kinetic"
                style={kinetic_background(pointer, seconds, desktop)}
                aria-hidden="true"
            />

            <div class="section-inner">
                <div class="about-header">
                    <h2
                        class={classes!("about-title", Entrance::RiseFull.class(revealed))}
                        style={delay_style(100)}
                    >
                        {"THE "}<span class="gradient-text font-syne">{"HUMAN"}</span><br />
                        {"BEHIND THE CODE."}
                    </h2>
                    <div
                        class={classes!("about-rule", Entrance::Grow.class(revealed))}
                        style={delay_style(500)}
                    />
                </div>

                <div class="bento">
                    <div class={classes!("bento-card", "bento-card--bio", Entrance::Rise.class(revealed))}>
                        <div class="bento-card-body" style={bio_tilt}>
                            <span class="bento-label">{"Biography"}</span>
                            <p class="bio-lead">
                                {"I'm an "}
                                <span class="accent-violet">{"aspiring full-stack developer"}</span>
                                {" and "}
                                <span class="accent-fuchsia font-syne">{"creative problem solver"}</span>
                                {" with a relentless drive for building precision digital tools."}
                            </p>
                            <p class="bio-body">
                                {"I approach programming as an art form of logic. As a fresher, my \"experience\" is measured in hours of deep-work, curiosity-driven projects, and a rapid ability to master new architectures. Based in India, building for the world."}
                            </p>
                            <div class="bio-footer">
                                <div class="avatar-stack" aria-hidden="true">
                                    <div class="avatar" />
                                    <div class="avatar" />
                                    <div class="avatar" />
                                </div>
                                <span>{"Driven by innovation & clean architecture"}</span>
                            </div>
                        </div>
                    </div>

                    <div
                        class={classes!("bento-card", "bento-card--status", Entrance::FromRight.class(revealed))}
                        style={delay_style(200)}
                    >
                        <div class="bento-row">
                            <span class="bento-label">{"Current Status"}</span>
                            <span class="ping-dot" aria-hidden="true" />
                        </div>
                        <div>
                            <span class="status-headline">{"FRESHER"}</span>
                            <span class="status-caption">{"Eager to Build & Evolve"}</span>
                        </div>
                        <div class="status-bar"><div class="status-bar-fill" /></div>
                    </div>

                    <div
                        class={classes!("bento-card", "bento-card--stack", Entrance::FromRight.class(revealed))}
                        style={delay_style(300)}
                    >
                        <span class="bento-label">{"Power Stack"}</span>
                        <div class="stack-grid">
                            { for POWER_STACK.iter().take(POWER_STACK_FEATURED).map(|skill| html! {
                                <div key={skill.name} class="stack-chip">
                                    <span class="stack-name">{skill.name}</span>
                                    <div class="stack-track">
                                        <div class="stack-fill" style={format!("width: {}%;", skill.level)} />
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div
                        class={classes!("bento-card", "bento-card--philosophy", Entrance::Rise.class(revealed))}
                        style={delay_style(400)}
                    >
                        <div class="philosophy-icon" aria-hidden="true">
                            <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z" />
                            </svg>
                        </div>
                        <div>
                            <h4>{"Philosophy"}</h4>
                            <p class="philosophy-quote">
                                {"\"Logic is the foundation; aesthetics is the bridge. I build bridges that last.\""}
                            </p>
                        </div>
                    </div>

                    <div
                        class={classes!("bento-card", "bento-card--availability", Entrance::Rise.class(revealed))}
                        style={delay_style(500)}
                    >
                        <div class="bento-row">
                            <span class="pulse-dot" aria-hidden="true" />
                            <span class="bento-label">{"Available"}</span>
                        </div>
                        <h4 class="availability-headline">{"Open to Opportunities"}</h4>
                    </div>

                    <div
                        class={classes!("bento-card", "bento-card--interests", Entrance::Rise.class(revealed))}
                        style={delay_style(600)}
                    >
                        <span class="bento-label">{"Interests"}</span>
                        <ul class="interest-list">
                            { for INTERESTS.iter().map(|interest| html! {
                                <li key={interest.subject} class="interest">
                                    <span class="interest-glyph" aria-hidden="true">{interest.glyph}</span>
                                    <span class="interest-copy">
                                        <span class="interest-verb">{interest.verb}</span>
                                        <span class="interest-subject">{interest.subject}</span>
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="floating-words" style={floating_words(pointer, seconds)} aria-hidden="true">
                    { for FLOATING_WORDS.iter().map(|word| html! {
                        <span key={*word}>{*word}</span>
                    }) }
                </div>

                <a
                    class={classes!("pill-callout", Entrance::Scale.class(revealed))}
                    style={delay_style(1000)}
                    href="#collaboration"
                >
                    <span class="pill-callout-inner">
                        <span class="gradient-text">{"Start the collaboration"}</span>
                        <svg class="button-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </span>
                </a>
            </div>

            <svg class="noise-defs" width="0" height="0" aria-hidden="true">
                <filter id="noiseFilter">
                    <feTurbulence type="fractalNoise" baseFrequency="0.6" numOctaves="3" stitchTiles="stitch" />
                </filter>
            </svg>
        </section>
    }
}
