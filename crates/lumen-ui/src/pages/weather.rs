//! Weather page.
//!
//! Shows a fixed week outlook; every day card reveals on scroll.

use leptos::prelude::*;

use crate::components::Reveal;

/// Sky conditions shown on a day card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Clear sky.
    Sunny,
    /// Some clouds.
    PartlyCloudy,
    /// Overcast.
    Cloudy,
    /// Rain.
    Rain,
}

impl Condition {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
        }
    }

    /// CSS class modifier for the card.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sunny => "day-sunny",
            Self::PartlyCloudy => "day-partly-cloudy",
            Self::Cloudy => "day-cloudy",
            Self::Rain => "day-rain",
        }
    }
}

/// Outlook for one day.
#[derive(Debug, Clone, Copy)]
pub struct DayOutlook {
    /// Short day name.
    pub day: &'static str,
    /// Expected conditions.
    pub condition: Condition,
    /// High temperature in °C.
    pub high_c: i16,
    /// Low temperature in °C.
    pub low_c: i16,
}

/// The outlook rendered on the page.
pub static WEEK: [DayOutlook; 7] = [
    DayOutlook { day: "Mon", condition: Condition::Sunny, high_c: 24, low_c: 14 },
    DayOutlook { day: "Tue", condition: Condition::PartlyCloudy, high_c: 22, low_c: 13 },
    DayOutlook { day: "Wed", condition: Condition::Cloudy, high_c: 19, low_c: 12 },
    DayOutlook { day: "Thu", condition: Condition::Rain, high_c: 16, low_c: 10 },
    DayOutlook { day: "Fri", condition: Condition::Rain, high_c: 15, low_c: 9 },
    DayOutlook { day: "Sat", condition: Condition::PartlyCloudy, high_c: 18, low_c: 8 },
    DayOutlook { day: "Sun", condition: Condition::Sunny, high_c: 21, low_c: 11 },
];

/// Format a temperature for display.
pub fn format_temperature(celsius: i16) -> String {
    format!("{celsius}°")
}

/// Weather page, mounted for `/weather`.
#[component]

pub fn WeatherPage() -> impl IntoView {
    view! {
        <main class="page page-weather">
            <Reveal class="hero">
                <h1 class="hero-title">"This week"</h1>
                <p class="hero-subtitle">"Scroll down for the days ahead."</p>
            </Reveal>
            <section class="outlook">
                {WEEK
                    .iter()
                    .map(|outlook| {
                        let class = format!("card day-card {}", outlook.condition.class());
                        view! {
                            <Reveal class=class>
                                <h2 class="day-name">{outlook.day}</h2>
                                <p class="day-condition">{outlook.condition.label()}</p>
                                <p class="day-temps">
                                    <span class="temp-high">{format_temperature(outlook.high_c)}</span>
                                    " / "
                                    <span class="temp-low">{format_temperature(outlook.low_c)}</span>
                                </p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
