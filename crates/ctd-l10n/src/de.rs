//! German language pack.

use ctd_core::{DateStrings, ExportStrings, OverviewStrings, TraceLocationStrings};

pub(crate) static OVERVIEW: OverviewStrings = OverviewStrings {
    low_risk_title: "Niedriges Risiko",
    increased_risk_title: "Erhöhtes Risiko",

    risk_text_standard_cause: "aufgrund der gemeldeten Begegnungen",
    risk_text_low_risk_encounters_cause:
        "aufgrund einer erhöhten Anzahl von Begegnungen mit niedrigem Risiko",
    risk_text_disclaimer:
        "Ihre Tagebuch-Einträge haben keinen Einfluss auf die Risiko-Ermittlung.",

    duration_less_than_15_minutes: "unter 15 Minuten",
    duration_more_than_15_minutes: "über 15 Minuten",
    mask_situation_with_mask: "mit Maske",
    mask_situation_without_mask: "ohne Maske",
    setting_outside: "im Freien",
    setting_inside: "im Gebäude",

    abbreviation_hours: "Std.",
};

pub(crate) static TRACE_LOCATIONS: TraceLocationStrings = TraceLocationStrings {
    unspecified_title: "Keine Angabe",
    permanent_other_title: "Anderer Ort",
    temporary_other_title: "Andere Veranstaltung",

    retail_title: "Einzelhandel",
    retail_subtitle: "Geschäfte und Märkte",
    food_service_title: "Gastronomie",
    food_service_subtitle: "Restaurants und Cafés",
    craft_title: "Handwerksbetrieb",
    craft_subtitle: "Werkstätten und Ateliers",
    workplace_title: "Arbeitsstätte",
    workplace_subtitle: "Büros und Fabriken",
    educational_institution_title: "Bildungseinrichtung",
    educational_institution_subtitle: "Schulen und Hochschulen",
    public_building_title: "Öffentliches Gebäude",
    public_building_subtitle: "Ämter und Behörden",

    cultural_event_title: "Kulturveranstaltung",
    cultural_event_subtitle: "Konzerte, Theater, Kino",
    club_activity_title: "Vereinsaktivität",
    club_activity_subtitle: "Sport und Freizeit",
    private_event_title: "Private Feier",
    private_event_subtitle: "Partys und Feiern",
    worship_service_title: "Gottesdienst",
};

pub(crate) static DATES: DateStrings = DateStrings {
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    date_pattern: "%d.%m.%y",
};

pub(crate) static EXPORT: ExportStrings = ExportStrings {
    heading: "Kontakt-Tagebuch",
    intro: "Die nachfolgenden Einträge sind ein Vorschlag zur Erleichterung der Kontaktnachverfolgung.",
};
