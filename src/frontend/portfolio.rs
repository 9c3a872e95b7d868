use web_sys::{FocusEvent, MouseEvent};
use yew::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    reveal::{delay_style, stagger_delay_ms, Entrance},
    selection::HoverSelection,
};

use super::hooks::use_reveal;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    project: Project,
    highlighted: bool,
    dimmed: bool,
    revealed: bool,
    on_hover: Callback<Option<usize>>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let index = props.index;
    let project = props.project;

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
    };
    let onfocus = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: FocusEvent| on_hover.emit(Some(index)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };
    let onblur = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: FocusEvent| on_hover.emit(None))
    };

    html! {
        <article
            class={classes!(
                "project-card",
                Entrance::RiseFar.class(props.revealed),
                props.highlighted.then_some("is-highlighted"),
                props.dimmed.then_some("is-dimmed")
            )}
            style={delay_style(300 + stagger_delay_ms(index, 150))}
            tabindex="0"
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            onfocus={onfocus}
            onblur={onblur}
        >
            <div class={classes!("project-media", project.gradient)}>
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-copy">
                <span class="project-category">{project.category}</span>
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <ul class="project-tech">
                    { for project.tech.iter().map(|tech| html! { <li key={*tech}>{*tech}</li> }) }
                </ul>
            </div>
        </article>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone());
    let selection = use_state(|| HoverSelection::new(PROJECTS.len(), None));

    let on_hover = {
        let selection = selection.clone();
        Callback::from(move |target: Option<usize>| {
            let mut next = *selection;
            match target {
                Some(index) => {
                    next.hover(index);
                }
                None => next.clear(),
            }
            selection.set(next);
        })
    };

    html! {
        <section ref={section} id="showcase" class="portfolio">
            <div class="section-inner">
                <div class="portfolio-header">
                    <div class={Entrance::Rise.class(revealed)}>
                        <span class="eyebrow">{"Curated Work"}</span>
                        <h2 class="portfolio-title">
                            {"SELECTED"}<br />
                            <span class="gradient-text">{"PROJECTS"}</span>
                        </h2>
                    </div>
                    <p class={classes!("section-lede", Entrance::Rise.class(revealed))} style={delay_style(300)}>
                        {"A collection of digital artifacts exploring the intersection of design, code, and user psychology."}
                    </p>
                </div>

                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.title}
                            index={index}
                            project={*project}
                            highlighted={selection.is_active(index)}
                            dimmed={selection.current().is_some() && !selection.is_active(index)}
                            revealed={revealed}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </div>

                <div class={classes!("portfolio-footer", Entrance::Fade.class(revealed))} style={delay_style(700)}>
                    <p>{"STAY TUNED • 2026"}</p>
                </div>
            </div>

            <div class="portfolio-rule portfolio-rule--horizontal" aria-hidden="true" />
            <div class="portfolio-rule portfolio-rule--vertical" aria-hidden="true" />
        </section>
    }
}
