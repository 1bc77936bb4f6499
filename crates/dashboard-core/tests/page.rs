// File: crates/dashboard-core/tests/page.rs
// Purpose: Page shell state transitions, summary block and card isolation.

use dashboard_core::markup::Markup;
use dashboard_core::page::{write_bar_card, write_line_card, write_summary};
use dashboard_core::{render_page, ChartLayout, CityId, DashboardState, Dataset, Language, PageModel, Palette, Summary};

fn cards(state: DashboardState) -> (String, String, String) {
    let model = PageModel::build(&Dataset::coffee(), state, &ChartLayout::default());
    let palette = Palette::default();
    let mut bar = Markup::new();
    write_bar_card(&mut bar, &model.bar, &palette);
    let mut line = Markup::new();
    write_line_card(&mut line, &model.line, &palette);
    let mut summary = Markup::new();
    write_summary(&mut summary, &model.summary);
    (bar.finish(), line.finish(), summary.finish())
}

#[test]
fn default_state() {
    let s = DashboardState::default();
    assert_eq!(s.language, Language::En);
    assert_eq!(s.selected_city, CityId::CityA);
}

#[test]
fn transitions_replace_one_field() {
    let mut s = DashboardState::default();
    s.set_language(Language::Fr);
    assert_eq!(s, DashboardState::new(Language::Fr, CityId::CityA));
    s.set_selected_city(CityId::CityB);
    assert_eq!(s, DashboardState::new(Language::Fr, CityId::CityB));
    s.set_language(Language::Fr);
    assert_eq!(s.language, Language::Fr);
}

#[test]
fn summary_means_and_captions() {
    let en = Summary::new(&Dataset::coffee(), Language::En);
    assert_eq!(en.title, "Data Summary");
    assert_eq!(en.entries[0].average, 148);
    assert_eq!(en.entries[1].average, 128);
    assert_eq!(en.entries[0].caption, "City A Avg");

    let fr = Summary::new(&Dataset::coffee(), Language::Fr);
    assert_eq!(fr.entries[1].caption, "Ville B Moy.");
    assert_eq!(fr.entries[1].average, 128);
}

#[test]
fn switching_city_only_touches_line_card() {
    let (bar_a, line_a, sum_a) = cards(DashboardState::new(Language::En, CityId::CityA));
    let (bar_b, line_b, sum_b) = cards(DashboardState::new(Language::En, CityId::CityB));
    assert_eq!(bar_a, bar_b);
    assert_eq!(sum_a, sum_b);
    assert_ne!(line_a, line_b);
    assert!(line_a.contains("fill=\"#3b82f6\""));
    assert!(line_b.contains("stroke=\"#ef4444\""));
    assert!(line_b.contains("City B - cups per person"));
}

#[test]
fn switching_language_keeps_numbers() {
    let (bar_en, line_en, sum_en) = cards(DashboardState::new(Language::En, CityId::CityA));
    let (bar_fr, line_fr, sum_fr) = cards(DashboardState::new(Language::Fr, CityId::CityA));
    assert_ne!(bar_en, bar_fr);
    assert_ne!(line_en, line_fr);
    for v in ["120", "135", "145", "160", "155", "170"] {
        let needle = format!(">{v}</text>");
        assert!(bar_en.contains(&needle) && bar_fr.contains(&needle), "bar value {v}");
        assert!(line_en.contains(&needle) && line_fr.contains(&needle), "line value {v}");
    }
    assert!(sum_en.contains(">148<") && sum_fr.contains(">148<"));
    assert!(sum_en.contains(">128<") && sum_fr.contains(">128<"));
    assert!(bar_fr.contains(">Fév</text>"));
}

#[test]
fn selector_marks_current_city() {
    let (_, line, _) = cards(DashboardState::new(Language::En, CityId::CityB));
    assert!(line.contains("<option value=\"cityA\">City A</option>"));
    assert!(line.contains("<option value=\"cityB\" selected>City B</option>"));
    assert!(line.contains("<label for=\"city-select\">Select City:</label>"));
}

#[test]
fn full_page_structure() {
    let html = render_page(&Dataset::coffee(), &DashboardState::new(Language::Fr, CityId::CityA));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"fr\">"));
    assert!(html.contains("<h1>Tableau de Bord de Consommation de Café Mensuelle</h1>"));
    assert!(html.contains("<span class=\"label\">Langue:</span>"));
    assert!(html.contains("class=\"lang-btn active\" data-lang=\"fr\">Français</button>"));
    assert!(html.contains("class=\"lang-btn\" data-lang=\"en\">English</button>"));
    assert!(html.contains("Avis:</strong>"));
    assert!(html.contains("id=\"bar-chart\""));
    assert!(html.contains("id=\"line-chart\""));
    assert!(html.contains("id=\"summary\""));
    assert_eq!(html.matches("<svg ").count(), 2);
    assert!(html.trim_end().ends_with("</html>"));
}
