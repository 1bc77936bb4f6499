// File: crates/dashboard-core/src/page.rs
// Summary: Page shell: UI state, derived summary and the full HTML document.
// Notes:
// - `DashboardState` is the only mutable state; every render is a pure function of it.
// - The card writers are public so each card can be rendered (and compared) on its own.

use crate::bar::{bar_chart, BarChartModel};
use crate::dataset::{CityId, Dataset};
use crate::i18n::Language;
use crate::line::{line_chart, LineChartModel};
use crate::markup::Markup;
use crate::style::DASHBOARD_CSS;
use crate::svg::{write_bar_chart, write_line_chart};
use crate::theme::Palette;
use crate::types::ChartLayout;

/// Interactive state held by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub language: Language,
    pub selected_city: CityId,
}

impl DashboardState {
    pub fn new(language: Language, selected_city: CityId) -> Self {
        Self { language, selected_city }
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(from = %self.language, to = %language, "language switched");
        self.language = language;
    }

    pub fn set_selected_city(&mut self, city: CityId) {
        tracing::debug!(from = %self.selected_city, to = %city, "city selected");
        self.selected_city = city;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryEntry {
    pub city: CityId,
    /// "City A Avg" / "Ville A Moy."
    pub caption: String,
    pub average: i64,
}

/// Per-city rounded means shown under the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub title: &'static str,
    pub entries: [SummaryEntry; 2],
}

impl Summary {
    pub fn new(dataset: &Dataset, language: Language) -> Self {
        let strings = language.strings();
        let entries = CityId::ALL.map(|city| SummaryEntry {
            city,
            caption: format!("{} {}", strings.city(city), strings.average),
            average: dataset.series(city).rounded_mean().unwrap_or(0),
        });
        Self { title: strings.summary_title, entries }
    }
}

/// Everything one render of the page needs, derived from data + state.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel {
    pub state: DashboardState,
    pub bar: BarChartModel,
    pub line: LineChartModel,
    pub summary: Summary,
}

impl PageModel {
    pub fn build(dataset: &Dataset, state: DashboardState, layout: &ChartLayout) -> Self {
        Self {
            state,
            bar: bar_chart(dataset, state.language, layout),
            line: line_chart(dataset, state.language, state.selected_city, layout),
            summary: Summary::new(dataset, state.language),
        }
    }
}

/// One language switch button as the header draws it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LangButton {
    pub lang: Language,
    pub label: &'static str,
    pub class: &'static str,
}

pub fn lang_buttons(active: Language) -> [LangButton; 2] {
    Language::ALL.map(|lang| LangButton {
        lang,
        label: lang.native_name(),
        class: if lang == active { "lang-btn active" } else { "lang-btn" },
    })
}

/// CSS class of a summary value; colored like its series.
pub fn summary_value_class(city: CityId) -> &'static str {
    match city {
        CityId::CityA => "value city-a",
        CityId::CityB => "value city-b",
    }
}

/// Render the complete, self-contained HTML document with the default layout and palette.
pub fn render_page(dataset: &Dataset, state: &DashboardState) -> String {
    render_page_with(dataset, state, &ChartLayout::default(), &Palette::default())
}

pub fn render_page_with(
    dataset: &Dataset,
    state: &DashboardState,
    layout: &ChartLayout,
    palette: &Palette,
) -> String {
    let model = PageModel::build(dataset, *state, layout);
    let strings = state.language.strings();
    let mut w = Markup::with_capacity(24 * 1024);

    w.raw("<!DOCTYPE html>").newline();
    w.start("html").attr("lang", state.language.tag()).open();
    w.raw("<head><meta charset=\"utf-8\">");
    w.raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    w.start("title").open().text(strings.title).end("title");
    w.raw("<style>").raw(DASHBOARD_CSS).raw("</style></head>").newline();
    w.raw("<body><div class=\"page\"><div class=\"container\">").newline();

    write_header(&mut w, state.language);
    w.newline();

    w.raw("<div class=\"charts\">").newline();
    write_bar_card(&mut w, &model.bar, palette);
    w.newline();
    write_line_card(&mut w, &model.line, palette);
    w.newline();
    w.raw("</div>").newline();

    write_summary(&mut w, &model.summary);
    w.newline();

    w.raw("</div></div></body></html>").newline();
    tracing::debug!(language = %state.language, city = %state.selected_city, "page rendered");
    w.finish()
}

/// Language switch, title, subtitle and the disclaimer banner.
pub fn write_header(w: &mut Markup, language: Language) {
    let strings = language.strings();
    w.raw("<header class=\"header\"><div class=\"toolbar\"><div></div>");
    w.raw("<div class=\"lang-switch\">");
    w.start("span").attr("class", "label").open().text(format!("{}:", strings.language)).end("span");
    for button in lang_buttons(language) {
        w.start("button")
            .attr("type", "button")
            .attr("class", button.class)
            .attr("data-lang", button.lang.tag())
            .open()
            .text(button.label)
            .end("button");
    }
    w.raw("</div></div>");
    w.start("h1").open().text(strings.title).end("h1");
    w.start("p").attr("class", "subtitle").open().text(strings.subtitle).end("p");
    w.raw("<div class=\"notice\"><p>");
    w.start("strong").open().text(format!("\u{26a0}\u{fe0f} {}:", strings.notice)).end("strong");
    w.text(format!(" {}", strings.disclaimer));
    w.raw("</p></div></header>");
}

pub fn write_bar_card(w: &mut Markup, model: &BarChartModel, palette: &Palette) {
    w.start("section").attr("class", "card").attr("id", "bar-chart").open();
    w.start("h3").open().text(model.title).end("h3");
    write_bar_chart(w, model, palette);
    w.start("p").attr("class", "caption").open().text(model.caption).end("p");
    w.end("section");
}

pub fn write_line_card(w: &mut Markup, model: &LineChartModel, palette: &Palette) {
    w.start("section").attr("class", "card").attr("id", "line-chart").open();
    w.start("h3").open().text(model.title).end("h3");
    w.raw("<div class=\"selector\">");
    w.start("label").attr("for", "city-select").open().text(model.select_label).end("label");
    w.start("select").attr("id", "city-select").attr("name", "city").open();
    for option in &model.options {
        w.start("option")
            .attr("value", option.city.tag())
            .flag("selected", option.selected)
            .open()
            .text(option.label)
            .end("option");
    }
    w.end("select").raw("</div>");
    write_line_chart(w, model, palette);
    w.start("p").attr("class", "caption").open().text(&model.caption).end("p");
    w.end("section");
}

pub fn write_summary(w: &mut Markup, summary: &Summary) {
    w.start("section").attr("class", "card summary").attr("id", "summary").open();
    w.start("h3").open().text(summary.title).end("h3");
    w.raw("<div class=\"summary-grid\">");
    for entry in &summary.entries {
        w.raw("<div class=\"stat\">");
        w.start("div").attr("class", summary_value_class(entry.city)).open().text(entry.average).end("div");
        w.start("div").attr("class", "name").open().text(&entry.caption).end("div");
        w.raw("</div>");
    }
    w.raw("</div>");
    w.end("section");
}
