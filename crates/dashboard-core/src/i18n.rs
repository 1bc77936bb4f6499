// File: crates/dashboard-core/src/i18n.rs
// Summary: English/French display strings and month labels.
// Notes:
// - `Strings` is a plain struct so a missing key is a compile error, not a lookup miss.

use std::fmt;
use std::str::FromStr;

use crate::dataset::CityId;
use crate::error::UnknownTag;

/// Number of calendar periods every series and label sequence carries.
pub const PERIODS: usize = 6;

pub const MONTHS_EN: [&str; PERIODS] = ["January", "February", "March", "April", "May", "June"];
pub const MONTHS_FR: [&str; PERIODS] = ["Janvier", "Février", "Mars", "Avril", "Mai", "Juin"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub const fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in itself; used on the switch buttons.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }

    pub fn months(self) -> &'static [&'static str; PERIODS] {
        match self {
            Language::En => &MONTHS_EN,
            Language::Fr => &MONTHS_FR,
        }
    }

    /// Axis label for period `index`: the first three characters of the month name.
    pub fn short_month(self, index: usize) -> &'static str {
        let name = self.months()[index];
        match name.char_indices().nth(3) {
            Some((end, _)) => &name[..end],
            None => name,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// Every display string the page uses.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub bar_chart_title: &'static str,
    pub line_chart_title: &'static str,
    pub city_a: &'static str,
    pub city_b: &'static str,
    pub select_city: &'static str,
    pub all_cities: &'static str,
    pub disclaimer: &'static str,
    pub consumption_unit: &'static str,
    pub language: &'static str,
    pub notice: &'static str,
    pub summary_title: &'static str,
    pub average: &'static str,
}

impl Strings {
    pub fn city(&self, city: CityId) -> &'static str {
        match city {
            CityId::CityA => self.city_a,
            CityId::CityB => self.city_b,
        }
    }

    /// Key/value view, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 14] {
        [
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("bar_chart_title", self.bar_chart_title),
            ("line_chart_title", self.line_chart_title),
            ("city_a", self.city_a),
            ("city_b", self.city_b),
            ("select_city", self.select_city),
            ("all_cities", self.all_cities),
            ("disclaimer", self.disclaimer),
            ("consumption_unit", self.consumption_unit),
            ("language", self.language),
            ("notice", self.notice),
            ("summary_title", self.summary_title),
            ("average", self.average),
        ]
    }
}

pub const EN: Strings = Strings {
    title: "Monthly Coffee Consumption Dashboard",
    subtitle: "Coffee Consumption in Two Cities",
    bar_chart_title: "Coffee Consumption Comparison (City A vs City B)",
    line_chart_title: "Coffee Consumption Trends Over 6 Months",
    city_a: "City A",
    city_b: "City B",
    select_city: "Select City:",
    all_cities: "All Cities",
    disclaimer: "synthetic data generated for educational purposes",
    consumption_unit: "cups per person",
    language: "Language",
    notice: "Notice",
    summary_title: "Data Summary",
    average: "Avg",
};

pub const FR: Strings = Strings {
    title: "Tableau de Bord de Consommation de Café Mensuelle",
    subtitle: "Consommation de Café dans Deux Villes",
    bar_chart_title: "Comparaison de Consommation de Café (Ville A vs Ville B)",
    line_chart_title: "Tendances de Consommation de Café sur 6 Mois",
    city_a: "Ville A",
    city_b: "Ville B",
    select_city: "Sélectionner Ville:",
    all_cities: "Toutes les Villes",
    disclaimer: "Ce tableau de bord utilise des données synthétiques générées à des fins éducatives.",
    consumption_unit: "tasses par personne",
    language: "Langue",
    notice: "Avis",
    summary_title: "Résumé des Données",
    average: "Moy.",
};
