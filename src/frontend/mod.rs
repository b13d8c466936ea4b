mod choreography;
mod gsap;
mod page_effects;
mod smooth_scroll;
mod typed;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollRestoration};
use yew::prelude::*;

use crate::catalogue::{Catalogue, Project};
use crate::dom::{self, Listener};
use crate::filter::{activates_tile, apply_filter, Filter};
use crate::menu::{self, listener_change, ListenerChange, MenuAction, MenuState};
use crate::scroll::{anchor_target, section_link_href};
use crate::theme;
use gsap::Gsap;
use smooth_scroll::SmoothScroll;

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const SKILLS: [(&str, &str); 4] = [
    ("Programming", "Python, R, SQL, JavaScript"),
    ("Data Viz", "Power BI, Tableau, Matplotlib, Seaborn"),
    ("ML / AI", "Scikit-learn, TensorFlow, Keras, PyTorch"),
    ("Cloud & Tools", "AWS, Azure, Git, Docker"),
];

const TIMELINE: [(&str, &str, &str); 3] = [
    ("2024", "Data Analyst Intern", "Dashboards and KPI reporting for retail operations."),
    ("2023", "B.E. Computer Science", "Coursework in statistics, databases and machine learning."),
    ("2022", "Freelance Analytics", "Survey analysis and visualization for small businesses."),
];

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    if !is_external(&props.href) {
        return html! {
            <a class="link" href={props.href.clone()}>{props.label.clone()}</a>
        };
    }

    html! {
        <a class="link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

/// Enter or Space on a focused tile follows its link. Keys pressed on the
/// link itself are left to the browser.
fn open_tile(event: KeyboardEvent) {
    if !activates_tile(&event.key()) {
        return;
    }
    let Some(tile) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .filter(|target| target.class_list().contains("project-tile"))
    else {
        return;
    };

    event.prevent_default();
    if let Some(link) = tile
        .query_selector("a")
        .ok()
        .flatten()
        .and_then(|link| link.dyn_into::<HtmlElement>().ok())
    {
        link.click();
    }
}

#[derive(Properties, PartialEq)]
struct ProjectsProps {
    catalogue: Rc<Catalogue>,
}

#[function_component(Projects)]
fn projects(props: &ProjectsProps) -> Html {
    let filter = use_state(Filter::default);
    let outcome = apply_filter(&filter, &props.catalogue.categories());

    let buttons = props.catalogue.filters.iter().map(|button| {
        let tag = button.filter();
        let active = tag == *filter;
        let onclick = {
            let filter = filter.clone();
            let tag = tag.clone();
            Callback::from(move |_: MouseEvent| filter.set(tag.clone()))
        };
        html! {
            <button
                type="button"
                class={classes!("filter-btn", active.then_some("active"))}
                data-filter={button.tag.clone()}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                {button.label.clone()}
            </button>
        }
    });

    // Keying on the active filter remounts the tiles so their entrance
    // animation replays with the new stagger.
    let tiles = props
        .catalogue
        .projects
        .iter()
        .zip(&outcome.cards)
        .enumerate()
        .map(|(index, (project, view))| {
            let Project {
                title,
                description,
                category,
                link,
            } = project;
            html! {
                <article
                    key={format!("{}-{index}", *filter)}
                    class={classes!(
                        "project-tile",
                        (!view.visible).then_some("hidden"),
                        view.visible.then_some("is-entering"),
                    )}
                    data-category={category.clone()}
                    style={format!("--reveal-delay: {}ms;", view.reveal_delay_ms)}
                    aria-hidden={(!view.visible).to_string()}
                    tabindex={if view.visible { "0" } else { "-1" }}
                    onkeydown={Callback::from(open_tile)}
                >
                    <h3>{title.clone()}</h3>
                    <p class="muted">{description.clone()}</p>
                    <ExternalLink href={link.clone()} label="View project" />
                </article>
            }
        });

    html! {
        <section id="projects" aria-labelledby="projects-heading" class="section-block">
            <h2 id="projects-heading" class="gs_reveal">{"Projects"}</h2>
            <div class="filter-bar" role="group" aria-label="Filter projects">
                { for buttons }
            </div>
            <p class="visible-count" aria-live="polite">{outcome.label()}</p>
            <div class="projects-grid">
                { for tiles }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    catalogue: Rc<Catalogue>,
    scroller: SmoothScroll,
    gsap: Option<Gsap>,
}

fn contains(node_ref: &NodeRef, target: &Node) -> bool {
    node_ref
        .get()
        .is_some_and(|node| node.contains(Some(target)))
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state(theme::resolve_theme);
    let menu = use_reducer_eq(MenuState::default);
    let menu_enabled = use_state(|| menu::menu_enabled(dom::viewport_size().1));

    let menu_items_ref = use_node_ref();
    let menu_bar_ref = use_node_ref();
    let close_menu_ref = use_node_ref();
    let logo_ref = use_node_ref();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            theme::apply_theme(current);
            || ()
        });
    }

    {
        let menu_enabled = menu_enabled.clone();
        use_effect_with((), move |_| {
            let mut attached = menu::menu_enabled(dom::viewport_size().1);
            let listener = dom::window_target().map(|target| {
                Listener::new(&target, "resize", move |_| {
                    match listener_change(attached, dom::viewport_size().1) {
                        ListenerChange::Attach => {
                            attached = true;
                            menu_enabled.set(true);
                        }
                        ListenerChange::Detach => {
                            attached = false;
                            menu_enabled.set(false);
                        }
                        ListenerChange::Keep => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let dispatcher = menu.dispatcher();
        let controls = [
            menu_items_ref.clone(),
            menu_bar_ref.clone(),
            close_menu_ref.clone(),
            logo_ref.clone(),
        ];
        use_effect_with(*menu_enabled, move |enabled| {
            let listener = if *enabled {
                dom::document_target().map(|target| {
                    Listener::new(&target, "click", move |event: Event| {
                        let inside_controls = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok())
                            .is_some_and(|target| {
                                controls.iter().any(|control| contains(control, &target))
                            });
                        dispatcher.dispatch(MenuAction::DocumentClick { inside_controls });
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_effect_with((), move |_| {
            let listener = dom::document_target().map(|target| {
                Listener::new(&target, "keydown", move |event: Event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape");
                    if escape {
                        dispatcher.dispatch(MenuAction::Escape);
                    }
                })
            });
            move || drop(listener)
        });
    }

    use_effect_with(menu.is_open(), |open| {
        if let Some(body) = dom::body() {
            let _ = body.class_list().toggle_with_force("menu-open", *open);
        }
        || ()
    });

    {
        let gsap = props.gsap;
        use_effect_with((), move |_| {
            page_effects::dismiss_loader();
            let cursor = page_effects::follow_cursor();
            let typed = typed::start(".dynamic-text");
            let choreography = choreography::install(gsap);
            log::info!("portfolio loaded");
            move || {
                if let Some(typed) = typed {
                    typed.destroy();
                }
                drop(choreography);
                drop(cursor);
            }
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme::toggle_theme(*theme)))
    };

    let on_toggle_menu = (*menu_enabled).then(|| {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    });

    let scroll_to_section = |href: &str| {
        let scroller = props.scroller.clone();
        let dispatcher = menu.dispatcher();
        let id = anchor_target(href).map(str::to_owned);
        Callback::from(move |event: MouseEvent| {
            let Some(id) = id.as_deref() else { return };
            event.prevent_default();
            if let Some(target) = dom::document().and_then(|d| d.get_element_by_id(id)) {
                scroller.scroll_to_element(&target);
            }
            dispatcher.dispatch(MenuAction::NavLinkClicked);
        })
    };

    let on_back_to_top = {
        let scroller = props.scroller.clone();
        Callback::from(move |_: MouseEvent| scroller.scroll_to_top())
    };

    // The closed layout belongs to the stylesheet; inline styles only take
    // over once the menu has been opened.
    let presentation = menu.presentation();
    let (bar_style, close_style) = if menu.is_open() {
        let bar = if presentation.bar_visible { "display: block;" } else { "display: none;" };
        let close = match (presentation.close_visible, presentation.close_raised) {
            (true, true) => "display: block; z-index: 1000;",
            (true, false) => "display: block;",
            (false, _) => "display: none;",
        };
        (Some(bar), Some(close))
    } else {
        (None, None)
    };

    let nav_links = NAV_SECTIONS.iter().map(|&(id, label)| {
        let href = section_link_href(id);
        html! {
            <li>
                <a class="nav-link" href={href.clone()} onclick={scroll_to_section(&href)}>{label}</a>
            </li>
        }
    });

    html! {
        <>
            <div id="loader" class="loader" aria-hidden="true"><span class="loader-ring"></span></div>
            <div id="custom-cursor" aria-hidden="true"></div>
            <a class="skip-link" href="#content" onclick={scroll_to_section("#content")}>{"Skip to main content"}</a>

            <nav id="navbar" class="nav" aria-label="Primary">
                <a ref={logo_ref} class="logo" href="#home" onclick={scroll_to_section("#home")}>
                    {"Saqhib"}
                </a>
                <ul
                    ref={menu_items_ref}
                    id="menu-items"
                    class={classes!("menu-items", menu.is_open().then_some("open"))}
                >
                    { for nav_links }
                </ul>
                <button
                    id="theme-toggle-btn"
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).pressed().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span aria-hidden="true">{(*theme).icon()}</span>
                </button>
                <button
                    ref={menu_bar_ref}
                    id="menuBar"
                    class="menu-icon"
                    type="button"
                    aria-label="Open menu"
                    aria-expanded={menu.is_open().to_string()}
                    style={bar_style}
                    onclick={on_toggle_menu.clone()}
                >
                    {"☰"}
                </button>
                <button
                    ref={close_menu_ref}
                    id="closeMenu"
                    class="menu-icon"
                    type="button"
                    aria-label="Close menu"
                    style={close_style}
                    onclick={on_toggle_menu}
                >
                    {"✕"}
                </button>
                <div class="nav-progress" aria-hidden="true"></div>
            </nav>

            <main id="content">
                <section id="home" class="hero">
                    <div class="hero-content">
                        <p class="muted">{"Hello, I'm"}</p>
                        <h1>{"Mohammed Saqhib"}</h1>
                        <p class="hero-role">{"I'm a "}<span class="dynamic-text"></span></p>
                        <a class="button drive-button" href="drive/" data-cursor-hover="true">{"Drive through my portfolio"}</a>
                    </div>
                    <img class="hero-img" src="images/profile.svg" alt="Portrait of Mohammed Saqhib" />
                </section>

                <section id="about" aria-labelledby="about-heading" class="section-block">
                    <h2 id="about-heading" class="gs_reveal">{"About"}</h2>
                    <p class="gs_reveal gs_reveal_fromLeft">
                        {"Aspiring data science and analytics professional based in Bengaluru, \
                          combining statistics, machine learning and visualization to answer \
                          questions with data."}
                    </p>
                </section>

                <section id="skills" aria-labelledby="skills-heading" class="section-block">
                    <h2 id="skills-heading" class="gs_reveal">{"Skills"}</h2>
                    <div class="skills-grid">
                        { for SKILLS.iter().map(|&(area, tools)| html! {
                            <div class="skill-card">
                                <h3>{area}</h3>
                                <p class="muted">{tools}</p>
                            </div>
                        }) }
                    </div>
                    <div class="timeline">
                        { for TIMELINE.iter().enumerate().map(|(index, &(year, title, detail))| html! {
                            <div class={classes!("timeline-container", if index % 2 == 0 { "left" } else { "right" })}>
                                <span class="timeline-year">{year}</span>
                                <h3>{title}</h3>
                                <p class="muted">{detail}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <Projects catalogue={props.catalogue.clone()} />

                <section id="contact" aria-labelledby="contact-heading" class="section-block">
                    <h2 id="contact-heading" class="gs_reveal">{"Contact"}</h2>
                    <ul class="row-list gs_reveal gs_reveal_fromRight">
                        <li><ExternalLink href="https://www.linkedin.com/in/mohammed-saqhib" label="LinkedIn" /></li>
                        <li><ExternalLink href="https://github.com/Saqhib" label="GitHub" /></li>
                    </ul>
                </section>
            </main>

            <button
                id="backToTop"
                class="back-to-top"
                type="button"
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
    }

    let catalogue = Catalogue::builtin().unwrap_or_else(|err| {
        log::error!("project catalogue is invalid: {err}");
        Catalogue::default()
    });

    let gsap = Gsap::detect();
    if let Some(gsap) = gsap {
        if dom::prefers_reduced_motion() {
            gsap.time_scale(0.5);
            log::info!("reduced motion requested; animations slowed");
        }
    }
    let scroller = SmoothScroll::init(gsap);

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            catalogue: Rc::new(catalogue),
            scroller,
            gsap,
        },
    )
    .render();
}
