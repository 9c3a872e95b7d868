use yew::prelude::*;

use crate::{
    content::{HERO_TAGS, OWNER_NAME, ROLES, UX_METRICS},
    motion::{geometric_shapes, parallax, particle_field, spotlight},
    signal::PointerMapping,
    ticker::ROLE_ROTATION_PERIOD,
};

use super::hooks::{use_pointer, use_ticker};

const PARTICLE_COUNT: usize = 30;
const SHAPE_COUNT: usize = 8;

fn name_glyphs() -> Html {
    OWNER_NAME
        .chars()
        .enumerate()
        .map(|(index, glyph)| {
            let style = format!("animation-delay: {:.2}s;", index as f64 * 0.12);
            html! {
                <span
                    class={classes!("name-glyph", (glyph == ' ').then_some("name-glyph--space"))}
                    style={style}
                >
                    {glyph.to_string()}
                </span>
            }
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let pointer = use_pointer(section.clone(), PointerMapping::Offset);
    let role = use_ticker(&ROLES, ROLE_ROTATION_PERIOD);
    let particles = use_memo((), |_| particle_field(PARTICLE_COUNT));
    let shapes = use_memo((), |_| geometric_shapes(SHAPE_COUNT));

    html! {
        <section ref={section} id="overview" class="hero">
            <div
                class="hero-spotlight"
                style={spotlight(pointer, 1200, "rgba(139, 92, 246, 0.12)", 70)}
                aria-hidden="true"
            />

            <div class="hero-particles" aria-hidden="true">
                { for particles.iter().map(|particle| html! {
                    <div class="particle" style={particle.anchor_style()}>
                        <div class={particle.size.class()} style={parallax(pointer, particle.divisor)} />
                    </div>
                }) }
            </div>

            <div class="hero-orb hero-orb--right" aria-hidden="true" />
            <div class="hero-orb hero-orb--left" aria-hidden="true" />
            <div class="hero-orb hero-orb--center" aria-hidden="true" />

            <div class="hero-shapes" aria-hidden="true">
                { for shapes.iter().map(|shape| html! {
                    <div class="hero-shape-anchor" style={shape.style(pointer)}>
                        <div class={shape.kind.class()} />
                    </div>
                }) }
            </div>

            <div class="hero-swatches" aria-hidden="true">
                <div class="swatch swatch--violet" />
                <div class="swatch swatch--fuchsia" style="animation-delay: 0.3s;" />
                <div class="swatch swatch--purple" style="animation-delay: 0.6s;" />
                <div class="swatch-rule" />
                <span class="swatch-label">{"BRAND"}</span>
            </div>

            <div class="hero-grid" aria-hidden="true" />

            <div class="hero-metrics" aria-hidden="true">
                { for UX_METRICS.iter().map(|metric| html! {
                    <div class="metric-row">
                        <span class="metric-row-label">{metric.label}</span>
                        <div class="metric-track">
                            <div class="metric-fill" style={format!("width: {}%;", metric.percent)} />
                        </div>
                    </div>
                }) }
            </div>

            <div class="hero-content">
                <div class="status-badge">
                    <span class="status-dot" aria-hidden="true" />
                    <span class="status-label">{"Available for Collaboration"}</span>
                </div>

                <div class="hero-name">
                    <h1 aria-label={OWNER_NAME}>{name_glyphs()}</h1>
                    <div class="hero-name-rule" aria-hidden="true" />
                </div>

                <div class="hero-role" aria-live="polite">
                    <h2><span class="gradient-text">{role.unwrap_or_default()}</span></h2>
                </div>

                <p class="hero-lede">
                    {"Passionate about creating "}
                    <span class="underline-accent">{"intuitive digital experiences"}</span>
                    {" that blend aesthetic appeal with user-centered design principles. Eager to bring fresh perspectives to "}
                    <em class="accent-text">{"modern UI/UX challenges"}</em>
                    {" and contribute to meaningful design solutions."}
                </p>

                <div class="hero-actions">
                    <a class="button button--primary" href="#showcase">
                        {"View Portfolio"}
                        <svg class="button-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </a>
                    <button type="button" class="button button--outline">
                        {"Download Resume"}
                        <svg class="button-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z" />
                        </svg>
                    </button>
                </div>

                <ul class="hero-tags">
                    { for HERO_TAGS.iter().enumerate().map(|(index, tag)| html! {
                        <li key={*tag} class="tag" style={format!("animation-delay: {}ms;", 1400 + index * 50)}>
                            {*tag}
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
