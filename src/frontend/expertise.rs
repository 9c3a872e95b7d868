use web_sys::{FocusEvent, MouseEvent};
use yew::prelude::*;

use crate::{
    content::{EXPERTISE, EXPERTISE_STATS},
    reveal::{delay_style, Entrance},
    selection::HoverSelection,
};

use super::hooks::use_reveal;

#[function_component(Expertise)]
pub fn expertise() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let selection = use_state(|| HoverSelection::sticky(EXPERTISE.len()));

    let select = {
        let selection = selection.clone();
        Callback::from(move |index: usize| {
            let mut next = *selection;
            if next.hover(index) {
                selection.set(next);
            }
        })
    };

    let detail = selection
        .current()
        .and_then(|index| EXPERTISE.get(index).map(|skill| (index, skill)));

    html! {
        <section ref={section} id="capabilities" class="expertise">
            <div class="expertise-blueprint" aria-hidden="true" />

            <div class="section-inner">
                <header class="expertise-header">
                    <span class={classes!("eyebrow", Entrance::Fade.class(revealed))}>{"Capabilities"}</span>
                    <h2
                        class={classes!("expertise-title", Entrance::Rise.class(revealed))}
                        style={delay_style(100)}
                    >
                        {"CRAFT & "}<span class="gradient-text">{"INTELLECT"}</span>
                    </h2>
                    <div
                        class={classes!("expertise-rule", Entrance::Grow.class(revealed))}
                        style={delay_style(300)}
                    />
                </header>

                <div class="expertise-split">
                    <ul class="skill-list">
                        { for EXPERTISE.iter().enumerate().map(|(index, skill)| {
                            let active = selection.is_active(index);
                            let onmouseenter = {
                                let select = select.clone();
                                Callback::from(move |_: MouseEvent| select.emit(index))
                            };
                            let onfocus = {
                                let select = select.clone();
                                Callback::from(move |_: FocusEvent| select.emit(index))
                            };
                            html! {
                                <li
                                    key={skill.id}
                                    class={classes!("skill-item", active.then_some("is-active"))}
                                    tabindex="0"
                                    aria-selected={active.to_string()}
                                    onmouseenter={onmouseenter}
                                    onfocus={onfocus}
                                >
                                    <span class="skill-index">{format!("{:02}", index + 1)}</span>
                                    <h3 class="skill-title">{skill.title}</h3>
                                    <span class="skill-arrow" aria-hidden="true">
                                        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                                        </svg>
                                    </span>
                                </li>
                            }
                        }) }
                    </ul>

                    <div class="skill-detail-frame">
                        <div class={classes!("skill-detail", Entrance::FromRight.class(revealed))}>
                            if let Some((index, skill)) = detail {
                                <div key={index} class="skill-detail-body">
                                    <div class={classes!("skill-badge", skill.gradient)}>
                                        <svg class="icon icon--large" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1" d={skill.icon_path} />
                                        </svg>
                                    </div>
                                    <h4 class="skill-detail-title">{skill.title}</h4>
                                    <p class="skill-detail-description">{skill.description}</p>
                                    <span class="eyebrow">{"Primary Ecosystem"}</span>
                                    <ul class="tool-list">
                                        { for skill.tools.iter().map(|tool| html! {
                                            <li key={*tool} class="tool">{*tool}</li>
                                        }) }
                                    </ul>
                                    <div class="skill-blueprint" aria-hidden="true">
                                        <div class="skill-blueprint-ring" />
                                        <div class="skill-blueprint-square" />
                                    </div>
                                </div>
                            }
                        </div>
                    </div>
                </div>

                <footer class={classes!("expertise-footer", Entrance::Fade.class(revealed))} style={delay_style(500)}>
                    <dl class="stat-row">
                        { for EXPERTISE_STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat">
                                <dt class="stat-value">{stat.value}</dt>
                                <dd class="stat-label">{stat.label}</dd>
                            </div>
                        }) }
                    </dl>
                    <p class="expertise-quote">
                        {"\"Tools are just leverage for the imagination. I leverage them with precision.\""}
                    </p>
                </footer>
            </div>
        </section>
    }
}
