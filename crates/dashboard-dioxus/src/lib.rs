// File: crates/dashboard-dioxus/src/lib.rs
// Summary: Dioxus page shell for the coffee dashboard (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Chart geometry comes from `dashboard_core`; components only map models to elements.

pub mod view;

#[cfg(feature = "desktop")]
pub mod ui {
    use dashboard_core::bar::BarChartModel;
    use dashboard_core::line::{LineChartModel, POINT_RADIUS, STROKE_WIDTH};
    use dashboard_core::page::{lang_buttons, summary_value_class};
    use dashboard_core::style::DASHBOARD_CSS;
    use dashboard_core::{ChartLayout, DashboardState, Dataset, Language, PageModel, Palette, Summary};
    use dioxus::prelude::*;

    use crate::view::{apply_city_change, bar_views, line_color};

    /// Root component. Owns the only mutable state (language + selected city);
    /// every child is re-derived from it.
    #[component]
    pub fn Dashboard(dataset: Dataset) -> Element {
        let mut state = use_signal(DashboardState::default);
        let current = *state.read();
        let palette = Palette::default();
        let PageModel { bar, line, summary, .. } =
            PageModel::build(&dataset, current, &ChartLayout::default());

        rsx! {
            div { class: "page",
                div { class: "container",
                    Header {
                        language: current.language,
                        on_language: move |lang: Language| state.write().set_language(lang),
                    }
                    div { class: "charts",
                        BarChartCard { model: bar, palette }
                        LineChartCard {
                            model: line,
                            palette,
                            on_select: move |raw: String| {
                                apply_city_change(&mut state.write(), &raw);
                            },
                        }
                    }
                    SummaryCard { summary }
                }
            }
        }
    }

    #[component]
    fn Header(language: Language, on_language: EventHandler<Language>) -> Element {
        let strings = language.strings();
        let switch_label = format!("{}:", strings.language);
        let notice = format!("\u{26a0}\u{fe0f} {}:", strings.notice);
        let buttons = lang_buttons(language);
        let title = strings.title;
        let subtitle = strings.subtitle;
        let disclaimer = strings.disclaimer;

        rsx! {
            header { class: "header",
                div { class: "toolbar",
                    div {}
                    div { class: "lang-switch",
                        span { class: "label", "{switch_label}" }
                        for button in buttons {
                            button {
                                key: "{button.lang}",
                                r#type: "button",
                                class: button.class,
                                onclick: move |_| on_language.call(button.lang),
                                "{button.label}"
                            }
                        }
                    }
                }
                h1 { "{title}" }
                p { class: "subtitle", "{subtitle}" }
                div { class: "notice",
                    p {
                        strong { "{notice}" }
                        " {disclaimer}"
                    }
                }
            }
        }
    }

    #[component]
    fn BarChartCard(model: BarChartModel, palette: Palette) -> Element {
        let bars = bar_views(&model, &palette);
        let grid_color = palette.grid.hex();
        let tick_color = palette.tick_label.hex();
        let label_color = palette.label.hex();
        let value_color = palette.bar_value.hex();
        let legend: Vec<_> = model
            .legend
            .iter()
            .map(|e| (e.clone(), palette.series(e.city).hex()))
            .collect();

        rsx! {
            section { class: "card", id: "bar-chart",
                h3 { "{model.title}" }
                svg { width: "{model.width}", height: "{model.height}",
                    for (i, g) in model.grid.iter().enumerate() {
                        line {
                            key: "grid-{i}",
                            x1: "{g.x1}", y1: "{g.y}", x2: "{g.x2}", y2: "{g.y}",
                            stroke: "{grid_color}", stroke_width: "1",
                        }
                    }
                    for (i, g) in model.grid.iter().enumerate() {
                        text {
                            key: "tick-{i}",
                            x: "{g.label_x}", y: "{g.label_y}",
                            text_anchor: "end", font_size: "14", fill: "{tick_color}",
                            "{g.label}"
                        }
                    }
                    for bar in bars.iter() {
                        rect {
                            key: "bar-{bar.key}",
                            x: "{bar.x}", y: "{bar.y}", width: "{bar.width}", height: "{bar.height}",
                            fill: "{bar.fill}",
                        }
                        text {
                            key: "value-{bar.key}",
                            x: "{bar.label_x}", y: "{bar.label_y}",
                            text_anchor: "middle", font_size: "12", font_weight: "600", fill: "{value_color}",
                            "{bar.value}"
                        }
                    }
                    for group in model.groups.iter() {
                        text {
                            key: "period-{group.period}",
                            x: "{group.label_x}", y: "{group.label_y}",
                            text_anchor: "middle", font_size: "14", fill: "{tick_color}",
                            "{group.label}"
                        }
                    }
                    for (entry, fill) in legend.iter() {
                        rect {
                            key: "swatch-{entry.city}",
                            x: "{entry.swatch_x}", y: "{entry.swatch_y}",
                            width: "{entry.swatch_size}", height: "{entry.swatch_size}",
                            fill: "{fill}",
                        }
                        text {
                            key: "legend-{entry.city}",
                            x: "{entry.label_x}", y: "{entry.label_y}",
                            font_size: "14", fill: "{label_color}",
                            "{entry.name}"
                        }
                    }
                }
                p { class: "caption", "{model.caption}" }
            }
        }
    }

    #[component]
    fn LineChartCard(model: LineChartModel, palette: Palette, on_select: EventHandler<String>) -> Element {
        let color = line_color(&model, &palette);
        let grid_color = palette.grid.hex();
        let tick_color = palette.tick_label.hex();
        let label_color = palette.label.hex();
        let selected = model.selected.tag();

        rsx! {
            section { class: "card", id: "line-chart",
                h3 { "{model.title}" }
                div { class: "selector",
                    label { r#for: "city-select", "{model.select_label}" }
                    select {
                        id: "city-select",
                        value: "{selected}",
                        onchange: move |evt: FormEvent| on_select.call(evt.value()),
                        for opt in model.options.iter() {
                            option {
                                key: "{opt.city}",
                                value: "{opt.city}",
                                selected: opt.selected,
                                "{opt.label}"
                            }
                        }
                    }
                }
                svg { width: "{model.width}", height: "{model.height}",
                    for (i, g) in model.grid.iter().enumerate() {
                        line {
                            key: "grid-{i}",
                            x1: "{g.x1}", y1: "{g.y}", x2: "{g.x2}", y2: "{g.y}",
                            stroke: "{grid_color}", stroke_width: "1",
                        }
                    }
                    for (i, g) in model.grid.iter().enumerate() {
                        text {
                            key: "tick-{i}",
                            x: "{g.label_x}", y: "{g.label_y}",
                            text_anchor: "end", font_size: "14", fill: "{tick_color}",
                            "{g.label}"
                        }
                    }
                    path {
                        d: "{model.path}",
                        stroke: "{color}",
                        stroke_width: "{STROKE_WIDTH}",
                        fill: "none",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                    }
                    for p in model.points.iter() {
                        g { key: "point-{p.period}",
                            circle { cx: "{p.x}", cy: "{p.y}", r: "{POINT_RADIUS}", fill: "{color}" }
                            text {
                                x: "{p.x}", y: "{p.label_y}",
                                text_anchor: "middle", font_size: "12", font_weight: "600", fill: "{label_color}",
                                "{p.value}"
                            }
                        }
                    }
                    for (i, label) in model.period_labels.iter().enumerate() {
                        text {
                            key: "period-{i}",
                            x: "{label.x}", y: "{label.y}",
                            text_anchor: "middle", font_size: "14", fill: "{tick_color}",
                            "{label.text}"
                        }
                    }
                }
                p { class: "caption", "{model.caption}" }
            }
        }
    }

    #[component]
    fn SummaryCard(summary: Summary) -> Element {
        rsx! {
            section { class: "card summary", id: "summary",
                h3 { "{summary.title}" }
                div { class: "summary-grid",
                    for entry in summary.entries.iter() {
                        div { key: "{entry.city}", class: "stat",
                            div { class: summary_value_class(entry.city), "{entry.average}" }
                            div { class: "name", "{entry.caption}" }
                        }
                    }
                }
            }
        }
    }

    /// Open a desktop window running the dashboard over the built-in dataset.
    pub fn run_dashboard() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { Dashboard { dataset: Dataset::coffee() } }
        }

        let cfg = dioxus_desktop::Config::new()
            .with_window(
                dioxus_desktop::WindowBuilder::new()
                    .with_title(Language::En.strings().title)
                    .with_inner_size(dioxus_desktop::LogicalSize::new(1180.0, 980.0)),
            )
            .with_custom_head(format!("<style>{}</style>", DASHBOARD_CSS));
        tracing::info!("launching desktop dashboard");
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals)
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_dashboard() -> Result<(), &'static str> {
    Err("dashboard-dioxus built without `desktop` feature; enable features to run the UI")
}
