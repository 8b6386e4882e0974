//! English language pack.

use ctd_core::{DateStrings, ExportStrings, OverviewStrings, TraceLocationStrings};

pub(crate) static OVERVIEW: OverviewStrings = OverviewStrings {
    low_risk_title: "Low Risk",
    increased_risk_title: "Increased Risk",

    risk_text_standard_cause: "due to encounters reported by exposure logging",
    risk_text_low_risk_encounters_cause:
        "due to an increased number of encounters with low risk",
    risk_text_disclaimer: "Your diary entries have no influence on the risk calculation.",

    duration_less_than_15_minutes: "less than 15 minutes",
    duration_more_than_15_minutes: "more than 15 minutes",
    mask_situation_with_mask: "with mask",
    mask_situation_without_mask: "without mask",
    setting_outside: "outside",
    setting_inside: "inside",

    abbreviation_hours: "h",
};

pub(crate) static TRACE_LOCATIONS: TraceLocationStrings = TraceLocationStrings {
    unspecified_title: "Unspecified",
    permanent_other_title: "Other place",
    temporary_other_title: "Other event",

    retail_title: "Retail",
    retail_subtitle: "Shops and markets",
    food_service_title: "Food service",
    food_service_subtitle: "Restaurants and cafés",
    craft_title: "Craft business",
    craft_subtitle: "Workshops and studios",
    workplace_title: "Workplace",
    workplace_subtitle: "Offices and factories",
    educational_institution_title: "Educational institution",
    educational_institution_subtitle: "Schools and universities",
    public_building_title: "Public building",
    public_building_subtitle: "Offices and authorities",

    cultural_event_title: "Cultural event",
    cultural_event_subtitle: "Concerts, theatre, cinema",
    club_activity_title: "Club activity",
    club_activity_subtitle: "Sports and leisure",
    private_event_title: "Private event",
    private_event_subtitle: "Parties and celebrations",
    worship_service_title: "Worship service",
};

pub(crate) static DATES: DateStrings = DateStrings {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    date_pattern: "%b %-d, %Y",
};

pub(crate) static EXPORT: ExportStrings = ExportStrings {
    heading: "Contact diary",
    intro: "The following entries are a suggestion to make contact tracing easier.",
};
